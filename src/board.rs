//! Bring-up of the peripherals the controller drives.

use display_interface::DisplayError;
use embedded_hal::digital::PinState;
use embassy_stm32::{
    gpio::{AnyPin, Input, Level, Output, Pull, Speed},
    i2c::I2c,
    mode::Blocking,
};
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

use crate::{draw_block, Button, DisplayBlock, DisplayOutput, Polarity, RgbIndicator};

/// I2C clock for the OLED.
pub const DISPLAY_I2C_FREQUENCY_IN_HZ: u32 = 400_000;

/// The RGB LED is common-anode: a channel lights when its pin is pulled low.
pub const INDICATOR_POLARITY: Polarity = Polarity::ActiveLow;

pub type Indicator = RgbIndicator<Output<'static>, Output<'static>, Output<'static>>;

type Driver = Ssd1306<
    I2CInterface<I2c<'static, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub fn create_stm32_config() -> embassy_stm32::Config {
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::{rcc::*, time::Hertz};
        config.rcc.hse = Some(Hse {
            freq: Hertz(32_000_000),
            mode: HseMode::Bypass,
            prescaler: HsePrescaler::DIV1,
        });
        config.rcc.sys = Sysclk::PLL1_R;
        config.rcc.pll = Some(Pll {
            source: PllSource::HSE,
            prediv: PllPreDiv::DIV2,
            mul: PllMul::MUL6,
            divp: None,
            divq: Some(PllQDiv::DIV2),
            divr: Some(PllRDiv::DIV2), // sysclk 48Mhz clock (32 / 2 * 6 / 2)
        });

        config
    }
}

/// Configures the three LED channels as outputs, all dark.
pub fn init_indicator_pins(red: AnyPin, green: AnyPin, blue: AnyPin) -> Indicator {
    let off = match INDICATOR_POLARITY.level(false) {
        PinState::High => Level::High,
        PinState::Low => Level::Low,
    };

    RgbIndicator::new(
        Output::new(red, off, Speed::Low),
        Output::new(green, off, Speed::Low),
        Output::new(blue, off, Speed::Low),
        INDICATOR_POLARITY,
    )
}

/// The button shorts the pin to ground, so it's pulled up and read active-low.
pub fn init_button_pin(pin: AnyPin) -> Button<Input<'static>> {
    Button::new(Input::new(pin, Pull::Up), Polarity::ActiveLow)
}

/// Initializes the 128x64 SSD1306 and blanks it.
pub fn init_display(i2c: I2c<'static, Blocking>) -> Result<Oled, DisplayError> {
    let interface = I2CDisplayInterface::new(i2c);
    let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    driver.init()?;
    driver.clear_buffer();
    driver.flush()?;

    Ok(Oled { driver })
}

pub struct Oled {
    driver: Driver,
}

impl DisplayOutput for Oled {
    type Error = DisplayError;

    fn render(&mut self, block: &DisplayBlock) -> Result<(), DisplayError> {
        draw_block(&mut self.driver, block)?;
        self.driver.flush()
    }
}
