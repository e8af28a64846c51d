use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{ClkPin, Config as SpiConfig, MosiPin, Spi};
use embassy_rp::Peri;
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::Timer;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_hal_bus::spi::ExclusiveDevice;
use log::{error, info};
use numcal::DisplayText;
use ssd1306::prelude::*;
use ssd1306::size::DisplaySize as DisplaySizeTrait;
use ssd1306::Ssd1306;
use static_cell::StaticCell;

// Display
type PinSpi = SPI1;
type DisplaySize = DisplaySize128x64;
type DisplayType = Ssd1306<
    SPIInterface<
        ExclusiveDevice<
            Spi<'static, PinSpi, embassy_rp::spi::Blocking>,
            Output<'static>,
            embedded_hal_bus::spi::NoDelay,
        >,
        Output<'static>,
    >,
    DisplaySize,
    ssd1306::mode::BufferedGraphicsMode<DisplaySize>,
>;

const SPI_FREQUENCY: u32 = 8_000_000; // 8 MHz
const RIGHT_EDGE: i32 = DisplaySize::WIDTH as i32 - 2;
const VALUE_LINE: i32 = 38;

/// What the calculator wants shown
#[derive(Debug, Clone)]
pub struct Screen {
    /// Written as is, right aligned
    pub text: DisplayText,
    /// Pending operator annunciator in the top left corner
    pub operator: Option<char>,
}

static DISPLAY: StaticCell<DisplayType> = StaticCell::new();
pub static DISPLAY_CHANNEL: Channel<ThreadModeRawMutex, Screen, 8> = Channel::new();

pub async fn init(
    spawner: &Spawner,
    pin_spi: Peri<'static, PinSpi>,
    pin_clk: Peri<'static, impl ClkPin<PinSpi>>,
    pin_mosi: Peri<'static, impl MosiPin<PinSpi>>,
    pin_dc: Peri<'static, impl Pin>,
    pin_rst: Peri<'static, impl Pin>,
    pin_cs: Peri<'static, impl Pin>,
) {
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = SPI_FREQUENCY;

    let spi = Spi::new_blocking_txonly(pin_spi, pin_clk, pin_mosi, spi_config);

    // Configure control pins
    let dc_pin = Output::new(pin_dc, Level::Low);
    let mut rst_pin = Output::new(pin_rst, Level::High);
    let cs_pin = Output::new(pin_cs, Level::High);

    // Reset the display
    rst_pin.set_low();
    Timer::after_millis(10).await;
    rst_pin.set_high();
    Timer::after_millis(10).await;

    let spi_device = ExclusiveDevice::new_no_delay(spi, cs_pin).unwrap();
    let interface = SPIInterface::new(spi_device, dc_pin);

    info!("Creating display driver ({}x{})...", DisplaySize::WIDTH, DisplaySize::HEIGHT);
    let display = DISPLAY.init(
        Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode(),
    );

    match display.init() {
        Ok(()) => {
            spawner.spawn(display_task(display).unwrap());
            info!("Display initialized successfully!");
        }
        Err(_) => {
            error!("Display initialization failed!");
        }
    }
}

#[embassy_executor::task]
async fn display_task(display: &'static mut DisplayType) {
    info!("Display rendering task started");

    let receiver = DISPLAY_CHANNEL.receiver();

    loop {
        let screen = receiver.receive().await;

        if let Err(e) = draw(&mut *display, &screen).and_then(|()| display.flush()) {
            error!("Display error: {e:?}");
        }
    }
}

fn draw<D>(target: &mut D, screen: &Screen) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let value_style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
    let right_aligned = TextStyleBuilder::new()
        .alignment(Alignment::Right)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(&screen.text, Point::new(RIGHT_EDGE, VALUE_LINE), value_style, right_aligned)
        .draw(target)?;

    if let Some(operator) = screen.operator {
        let mut buf = [0u8; 4];
        let symbol = operator.encode_utf8(&mut buf);
        let symbol_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline(symbol, Point::new(2, 6), symbol_style, Baseline::Middle).draw(target)?;
    }

    Ok(())
}
