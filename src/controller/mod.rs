use embedded_hal_async::delay::DelayNs;

use crate::{
    DisplayBlock, DisplayOutput, DwellPlan, IndicatorOutput, InputPoll, SignalState, Timing,
    POLL_INTERVAL_MS,
};


/// Drives one signal head through stop, caution and go, forever.
///
/// While at stop the button is sampled; a press ends stop early and makes the caution and go
/// that follow use the extended plan. Caution and go always run their full duration.
pub struct SignalController<I, D, B, T> {
    indicator: I,
    display: D,
    button: B,
    delay: T,
    timing: Timing,
    state: Option<SignalState>,
}

impl<I, D, B, T> SignalController<I, D, B, T>
where
    I: IndicatorOutput,
    D: DisplayOutput,
    B: InputPoll,
    T: DelayNs,
{
    pub fn new(indicator: I, display: D, button: B, delay: T) -> Self {
        Self::with_timing(indicator, display, button, delay, Timing::default())
    }

    pub fn with_timing(indicator: I, display: D, button: B, delay: T, timing: Timing) -> Self {
        Self {
            indicator,
            display,
            button,
            delay,
            timing,
            state: None,
        }
    }

    /// The state last entered, if any.
    pub fn state(&self) -> Option<SignalState> {
        self.state
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Shows the introduction screen, then cycles the signal until power-off.
    pub async fn run(&mut self) -> ! {
        self.introduce().await;

        loop {
            self.cycle().await;
        }
    }

    /// Blanks the light and shows the introduction for `Timing::intro_ms`.
    pub async fn introduce(&mut self) {
        info!("Showing introduction");
        if self.indicator.turn_off().is_err() {
            warn!("Failed to turn the indicator off");
        }
        if self.display.render(&DisplayBlock::INTRODUCTION).is_err() {
            warn!("Failed to render the introduction");
        }

        self.delay.delay_ms(self.timing.intro_ms).await;
    }

    /// Runs one stop, caution, go sequence and returns the plan it used.
    pub async fn cycle(&mut self) -> DwellPlan {
        self.enter_state(SignalState::Stop);
        let extension = self.wait_with_interrupt(self.timing.stop_ms).await;
        let plan = self.timing.plan(extension);
        info!("Dwell plan = {:?} (extended: {})", plan, extension);

        for _ in 0..2 {
            let state = self.advance();
            if let Some(dwell_ms) = state.dwell_ms(plan) {
                self.delay.delay_ms(dwell_ms).await;
            }
        }

        plan
    }

    /// Sets the indicator and the display for `state`.
    ///
    /// Both outputs are updated back to back without yielding, so nothing else runs while
    /// they disagree. A failing output is logged and skipped.
    pub fn enter_state(&mut self, state: SignalState) {
        info!("Setting signal = {:?}", state);
        self.state = Some(state);

        if self.indicator.set_color(state.color()).is_err() {
            warn!("Failed to set the indicator for {:?}", state);
        }
        if self.display.render(state.block()).is_err() {
            warn!("Failed to render the display for {:?}", state);
        }
    }

    /// Waits up to `timeout_ms`, sampling the button every [`POLL_INTERVAL_MS`].
    ///
    /// Returns `true` as soon as a sample reads pressed, `false` if the whole timeout elapsed.
    pub async fn wait_with_interrupt(&mut self, timeout_ms: u32) -> bool {
        let mut waited_ms = 0;
        while waited_ms < timeout_ms {
            if self.button.is_pressed() {
                info!("Button pressed after {} ms", waited_ms);
                return true;
            }
            self.delay.delay_ms(POLL_INTERVAL_MS).await;
            waited_ms += POLL_INTERVAL_MS;
        }

        false
    }

    fn advance(&mut self) -> SignalState {
        let mut state = self.state.unwrap_or_default();
        state.rotate();
        self.enter_state(state);

        state
    }
}
