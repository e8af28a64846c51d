#![no_std]
#![no_main]
mod tasks;

use embassy_executor::Spawner;
use embassy_rp::config::Config;
use embassy_time::Timer;
use tasks::{init_display, init_keypad, init_usb};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let peripherals = embassy_rp::init(Config::default());

    init_usb(
        &spawner,
        peripherals.USB
    ).await;

    init_display(
        &spawner,
        peripherals.SPI1,
        peripherals.PIN_14,
        peripherals.PIN_15,
        peripherals.PIN_13,
        peripherals.PIN_3,
        peripherals.PIN_10,
    ).await;

    init_keypad(&spawner, [
        peripherals.PIN_9.into(),
        peripherals.PIN_8.into(),
        peripherals.PIN_7.into(),
        peripherals.PIN_6.into(),
        peripherals.PIN_5.into(),
        peripherals.PIN_4.into(),
    ], [
        peripherals.PIN_26.into(),
        peripherals.PIN_27.into(),
        peripherals.PIN_28.into(),
        peripherals.PIN_29.into(),
    ]).await;

    defmt::info!("NumCal ready");

    // Busy loop
    loop {
        Timer::after_secs(1).await;
    }
}
