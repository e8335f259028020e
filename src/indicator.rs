use embedded_hal::digital::OutputPin;

use crate::{Color, Polarity};

/// A three-channel light that shows one [`Color`] at a time.
pub trait IndicatorOutput {
    type Error;

    /// Lights exactly the channels mapped to `color` and clears the rest.
    fn set_color(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Clears every channel.
    fn turn_off(&mut self) -> Result<(), Self::Error>;
}

/// Which channels of the RGB light are lit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Channels {
    pub const OFF: Self = Self {
        red: false,
        green: false,
        blue: false,
    };

    pub const fn of(color: Color) -> Self {
        match color {
            Color::Red => Self {
                red: true,
                ..Self::OFF
            },
            Color::Green => Self {
                green: true,
                ..Self::OFF
            },
            Color::Yellow => Self {
                red: true,
                green: true,
                ..Self::OFF
            },
        }
    }
}

/// An RGB light wired to three GPIOs.
pub struct RgbIndicator<R, G, B> {
    red: R,
    green: G,
    blue: B,
    polarity: Polarity,
}

impl<R, G, B, E> RgbIndicator<R, G, B>
where
    R: OutputPin<Error = E>,
    G: OutputPin<Error = E>,
    B: OutputPin<Error = E>,
{
    pub fn new(red: R, green: G, blue: B, polarity: Polarity) -> Self {
        Self {
            red,
            green,
            blue,
            polarity,
        }
    }

    pub fn apply(&mut self, channels: Channels) -> Result<(), E> {
        let polarity = self.polarity;
        self.red.set_state(polarity.level(channels.red))?;
        self.green.set_state(polarity.level(channels.green))?;
        self.blue.set_state(polarity.level(channels.blue))?;

        Ok(())
    }
}

impl<R, G, B, E> IndicatorOutput for RgbIndicator<R, G, B>
where
    R: OutputPin<Error = E>,
    G: OutputPin<Error = E>,
    B: OutputPin<Error = E>,
{
    type Error = E;

    fn set_color(&mut self, color: Color) -> Result<(), E> {
        self.apply(Channels::of(color))
    }

    fn turn_off(&mut self) -> Result<(), E> {
        self.apply(Channels::OFF)
    }
}

#[cfg(test)]
mod test {
    use core::convert::Infallible;
    use std::{cell::Cell, rc::Rc};

    use embedded_hal::digital::ErrorType;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Clone, Default)]
    struct Pin(Rc<Cell<Option<bool>>>);

    impl Pin {
        fn is_high(&self) -> bool {
            self.0.get().expect("pin was never driven")
        }
    }

    impl ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.set(Some(false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.set(Some(true));
            Ok(())
        }
    }

    fn indicator(polarity: Polarity) -> (RgbIndicator<Pin, Pin, Pin>, [Pin; 3]) {
        let pins = [Pin::default(), Pin::default(), Pin::default()];
        let [r, g, b] = pins.clone();
        (RgbIndicator::new(r, g, b, polarity), pins)
    }

    fn levels(pins: &[Pin; 3]) -> [bool; 3] {
        pins.each_ref().map(Pin::is_high)
    }

    #[test]
    fn channel_table() {
        assert_eq!(
            Channels::of(Color::Red),
            Channels { red: true, green: false, blue: false }
        );
        assert_eq!(
            Channels::of(Color::Green),
            Channels { red: false, green: true, blue: false }
        );
        assert_eq!(
            Channels::of(Color::Yellow),
            Channels { red: true, green: true, blue: false }
        );
    }

    #[test]
    fn active_high_lights_with_high_levels() {
        let (mut indicator, pins) = indicator(Polarity::ActiveHigh);

        indicator.set_color(Color::Yellow).unwrap();
        assert_eq!(levels(&pins), [true, true, false]);

        indicator.set_color(Color::Green).unwrap();
        assert_eq!(levels(&pins), [false, true, false]);

        indicator.turn_off().unwrap();
        assert_eq!(levels(&pins), [false, false, false]);
    }

    #[test]
    fn active_low_inverts_levels() {
        let (mut indicator, pins) = indicator(Polarity::ActiveLow);

        indicator.set_color(Color::Red).unwrap();
        assert_eq!(levels(&pins), [false, true, true]);

        indicator.turn_off().unwrap();
        assert_eq!(levels(&pins), [true, true, true]);
    }

    #[test]
    fn switching_colors_clears_the_previous_channels() {
        let (mut indicator, pins) = indicator(Polarity::ActiveHigh);

        indicator.set_color(Color::Yellow).unwrap();
        indicator.set_color(Color::Red).unwrap();
        assert_eq!(levels(&pins), [true, false, false]);
    }
}
