/// Button sampling cadence while the signal is at stop.
pub const POLL_INTERVAL_MS: u32 = 1;

/// Caution and go durations for one cycle. Picked once per cycle, at the end of stop.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwellPlan {
    pub caution_ms: u32,
    pub go_ms: u32,
}

impl DwellPlan {
    pub const STANDARD: Self = Self {
        caution_ms: 2_000,
        go_ms: 8_000,
    };
    pub const EXTENDED: Self = Self {
        caution_ms: 5_000,
        go_ms: 10_000,
    };
}

/// Durations the controller runs with.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Upper bound of the stop wait. A button press ends it early.
    pub stop_ms: u32,
    /// How long the introduction screen stays up at start-up.
    pub intro_ms: u32,
    pub standard: DwellPlan,
    pub extended: DwellPlan,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        stop_ms: 8_000,
        intro_ms: 5_000,
        standard: DwellPlan::STANDARD,
        extended: DwellPlan::EXTENDED,
    };

    pub const fn plan(&self, extension: bool) -> DwellPlan {
        if extension {
            self.extended
        } else {
            self.standard
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
