//! Runs a single traffic signal head on the STM32WL board: an RGB LED, an SSD1306 OLED on I2C2
//! and a push button that lengthens the next caution and go phases when pressed at stop.
#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::gpio::Pin;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::Hertz;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use traffic_light::board::*;
use traffic_light::SignalController;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let config = create_stm32_config();
    let p = embassy_stm32::init(config);

    let indicator = init_indicator_pins(
        p.PC6.degrade(), // Pin 12 on the board.
        p.PA8.degrade(), // Pin 16 on the board.
        p.PC0.degrade(), // Pin 14 on the board.
    );
    let button = init_button_pin(p.PA0.degrade());

    let i2c = I2c::new_blocking(
        p.I2C2,
        p.PA12,
        p.PA11,
        Hertz(DISPLAY_I2C_FREQUENCY_IN_HZ),
        i2c::Config::default(),
    );
    let display = init_display(i2c).unwrap();
    info!("Peripherals ready");

    let mut controller = SignalController::new(indicator, display, button, Delay);
    controller.run().await
}
