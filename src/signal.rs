use crate::{DisplayBlock, DwellPlan};

/// The three states of the signal head.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    Stop,
    Caution,
    Go,
}

impl SignalState {
    pub fn rotate(&mut self) {
        *self = self.next();
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Stop => Self::Caution,
            Self::Caution => Self::Go,
            Self::Go => Self::Stop,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Stop => Color::Red,
            Self::Caution => Color::Yellow,
            Self::Go => Color::Green,
        }
    }

    pub const fn block(self) -> &'static DisplayBlock {
        match self {
            Self::Stop => &DisplayBlock::STOP,
            Self::Caution => &DisplayBlock::CAUTION,
            Self::Go => &DisplayBlock::GO,
        }
    }

    /// Fixed sleep for the states that don't accept input. `Stop` has none: its wait is
    /// interruptible and bounded by `Timing::stop_ms` instead.
    pub const fn dwell_ms(self, plan: DwellPlan) -> Option<u32> {
        match self {
            Self::Stop => None,
            Self::Caution => Some(plan.caution_ms),
            Self::Go => Some(plan.go_ms),
        }
    }
}

impl Default for SignalState {
    fn default() -> Self {
        Self::Stop
    }
}

/// Colors the indicator can show. Yellow is red and green lit together.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
}
