//! Phase cycler
//!
//! Drives the red → yellow → green cycle. Each phase checks for cancellation,
//! clears the screen, renders its artwork and holds for its lit time. The hold
//! is not interrupted; a stop request is noticed at the next phase boundary.

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::cli::screen::{Screen, ScreenClearError};
use crate::light::color::Color;
use crate::light::overrides::OverrideSource;
use crate::light::traffic_light::TrafficLight;

/// Summary of a run that ended on cancellation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopped {
    /// Phases rendered before the stop
    pub phases_shown: u64,
    /// Complete red → yellow → green cycles held
    pub cycles_completed: u64,
    /// The last phase rendered, if any
    pub last_phase: Option<Color>,
}

/// Runs a traffic light until cancelled
#[derive(Debug, Clone)]
pub struct PhaseCycler {
    light: TrafficLight,
    hint: Option<String>,
}

impl PhaseCycler {
    /// Cycler for `light` with no hint line
    #[must_use]
    pub const fn new(light: TrafficLight) -> Self {
        Self { light, hint: None }
    }

    /// Show `hint` under every phase
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// The light being cycled
    #[must_use]
    pub const fn light(&self) -> &TrafficLight {
        &self.light
    }

    /// Run the cycle until `cancel` is observed or the screen cannot be cleared.
    ///
    /// Overrides are fetched once per cycle, before red is shown. Returns
    /// `Ok(Stopped)` on cancellation and the clear error otherwise; nothing is
    /// rendered after either.
    pub async fn run<S, O>(
        &self,
        screen: &mut S,
        cancel: &CancellationToken,
        overrides: &mut O,
    ) -> Result<Stopped, ScreenClearError>
    where
        S: Screen + ?Sized,
        O: OverrideSource + ?Sized,
    {
        let mut stopped = Stopped::default();
        let mut color = Color::Red;
        let mut timings = self.light.timings();

        loop {
            if cancel.is_cancelled() {
                tracing::info!(
                    phases = stopped.phases_shown,
                    cycles = stopped.cycles_completed,
                    "traffic light stopped"
                );
                return Ok(stopped);
            }

            if color == Color::Red {
                timings = self.light.resolve(&overrides.current());
                tracing::debug!(
                    cycle = stopped.cycles_completed + 1,
                    length = ?timings.cycle_length(),
                    "cycle starting"
                );
            }

            if let Err(err) = screen.clear() {
                tracing::error!("screen clear failed: {err}");
                return Err(err);
            }
            screen.render(color, self.hint.as_deref());
            stopped.phases_shown += 1;
            stopped.last_phase = Some(color);

            let hold = timings.get(color);
            tracing::debug!(%color, ?hold, "phase lit");
            sleep(hold).await;

            if color == Color::Green {
                stopped.cycles_completed += 1;
            }
            color = color.next();
        }
    }
}
