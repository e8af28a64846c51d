use embassy_executor::Spawner;
use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;
use embassy_time::Timer;
use numcal::{Calculator, Key, COLS, ROWS};
use static_cell::StaticCell;

use crate::tasks::{Screen, DISPLAY_CHANNEL};

/// Consecutive scans a key must hold a new level before it counts
const DEBOUNCE_SCANS: u8 = 5;

static ROWS_CELL: StaticCell<[Output<'static>; ROWS]> = StaticCell::new();
static COLS_CELL: StaticCell<[Input<'static>; COLS]> = StaticCell::new();

/// Debounced state of one switch in the matrix
#[derive(Clone, Copy, Default)]
struct Switch {
    pressed: bool,
    pending_scans: u8,
}

impl Switch {
    /// Feed one raw reading. Returns true when the switch just became pressed.
    fn measure(&mut self, is_low: bool) -> bool {
        if is_low == self.pressed {
            self.pending_scans = 0;
            return false;
        }

        self.pending_scans += 1;
        if self.pending_scans < DEBOUNCE_SCANS {
            return false;
        }

        self.pending_scans = 0;
        self.pressed = is_low;
        is_low
    }
}

struct KeyMatrix {
    switches: [[Switch; COLS]; ROWS],
}

impl KeyMatrix {
    fn new() -> Self {
        Self {
            switches: [[Switch::default(); COLS]; ROWS],
        }
    }

    /// Scan the matrix once. Returns the keys pressed since the last scan.
    async fn scan(
        &mut self,
        rows: &mut [Output<'static>; ROWS],
        cols: &[Input<'static>; COLS],
    ) -> heapless::Vec<Key, 24> {
        let mut presses = heapless::Vec::new();

        for (row_idx, row_pin) in rows.iter_mut().enumerate() {
            // Drive this row LOW
            row_pin.set_low();
            Timer::after_micros(10).await;

            for (col_idx, col_pin) in cols.iter().enumerate() {
                if self.switches[row_idx][col_idx].measure(col_pin.is_low()) {
                    if let Some(key) = Key::at(row_idx, col_idx) {
                        defmt::debug!("Key pressed: R{}C{} {}", row_idx, col_idx, key);
                        let _ = presses.push(key);
                    }
                }
            }

            row_pin.set_high();
        }

        presses
    }
}

pub async fn init(spawner: &Spawner, row_pins: [Peri<'static, AnyPin>; ROWS], col_pins: [Peri<'static, AnyPin>; COLS]) {
    let rows = ROWS_CELL.init(row_pins.map(|pin| Output::new(pin, Level::High)));
    let cols = COLS_CELL.init(col_pins.map(|pin| Input::new(pin, Pull::Up)));

    spawner.spawn(keypad_task(rows, cols).unwrap());
}

#[embassy_executor::task]
async fn keypad_task(
    rows: &'static mut [Output<'static>; ROWS],
    cols: &'static [Input<'static>; COLS],
) {
    defmt::info!("Keypad task started");

    let mut matrix = KeyMatrix::new();
    let mut calculator = Calculator::new();
    let sender = DISPLAY_CHANNEL.sender();

    sender.send(screen(&calculator, calculator.display())).await;

    loop {
        for key in matrix.scan(rows, cols).await {
            let Some(input) = key.input() else {
                continue;
            };

            let text = calculator.input(input);
            defmt::info!("{} -> {}", input, text.as_str());
            sender.send(screen(&calculator, text)).await;
        }

        // Scan rate: 1ms between scans
        Timer::after_millis(1).await;
    }
}

fn screen(calculator: &Calculator, text: numcal::DisplayText) -> Screen {
    Screen {
        text,
        operator: calculator.pending_operator().map(|op| op.symbol()),
    }
}
