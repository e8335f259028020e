use embedded_hal::digital::{InputPin, PinState};

/// Which level means "active" on a pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveLow,
    ActiveHigh,
}

impl Polarity {
    /// Pin level that drives an output to `active`.
    pub const fn level(self, active: bool) -> PinState {
        match (self, active) {
            (Self::ActiveHigh, true) | (Self::ActiveLow, false) => PinState::High,
            (Self::ActiveHigh, false) | (Self::ActiveLow, true) => PinState::Low,
        }
    }
}

/// A momentary button, sampled on demand.
pub trait InputPoll {
    /// Current state of the button. `true` means pressed. Never blocks.
    fn is_pressed(&mut self) -> bool;
}

pub struct Button<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }
}

impl<P: InputPin> InputPoll for Button<P> {
    fn is_pressed(&mut self) -> bool {
        let sample = match self.polarity {
            Polarity::ActiveLow => self.pin.is_low(),
            Polarity::ActiveHigh => self.pin.is_high(),
        };

        match sample {
            Ok(pressed) => pressed,
            Err(_) => {
                // Unreadable counts as released, so a faulty input can't grant an extension.
                warn!("button read failed");
                false
            }
        }
    }
}
