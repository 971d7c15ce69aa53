//! The traffic light entity
//!
//! A `TrafficLight` holds the default lit time of each color. It can only be
//! built from a triple that passes [`validate`], and it never changes after
//! construction.

use std::time::Duration;

use crate::light::color::Color;
use crate::light::overrides::DurationOverrides;
use crate::light::validate::{validate, ValidationError};

/// Lit time for each of the three colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long red stays lit
    pub red: Duration,
    /// How long yellow stays lit
    pub yellow: Duration,
    /// How long green stays lit
    pub green: Duration,
}

impl Timings {
    /// Build a triple from whole seconds
    #[must_use]
    pub const fn from_secs(red: u64, yellow: u64, green: u64) -> Self {
        Self {
            red: Duration::from_secs(red),
            yellow: Duration::from_secs(yellow),
            green: Duration::from_secs(green),
        }
    }

    /// Lit time for one color
    #[must_use]
    pub const fn get(&self, color: Color) -> Duration {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
        }
    }

    /// Check the triple against the per-color bounds
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self.red, self.yellow, self.green)
    }

    /// Length of one full red → yellow → green cycle, saturating at `Duration::MAX`
    #[must_use]
    pub const fn cycle_length(&self) -> Duration {
        self.red.saturating_add(self.yellow).saturating_add(self.green)
    }
}

/// A single simulated traffic signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficLight {
    timings: Timings,
}

impl TrafficLight {
    /// Create a traffic light with the given default lit times.
    ///
    /// Fails with the validator's error, unchanged, if any lit time is out of
    /// bounds.
    pub fn new(red: Duration, yellow: Duration, green: Duration) -> Result<Self, ValidationError> {
        validate(red, yellow, green)?;
        Ok(Self {
            timings: Timings { red, yellow, green },
        })
    }

    /// Create a traffic light from a prepared triple
    pub fn from_timings(timings: Timings) -> Result<Self, ValidationError> {
        Self::new(timings.red, timings.yellow, timings.green)
    }

    /// The stored default lit times
    #[must_use]
    pub const fn timings(&self) -> Timings {
        self.timings
    }

    /// Lit times to use for one cycle.
    ///
    /// With no overrides the stored lit times are returned as-is. Otherwise
    /// each overridden color replaces its stored value and the merged triple is
    /// validated again; if it fails, every color falls back to the stored
    /// value and no error is reported.
    #[must_use]
    pub fn resolve(&self, overrides: &DurationOverrides) -> Timings {
        if overrides.is_empty() {
            return self.timings;
        }

        let pick = |color| overrides.get(color).unwrap_or(self.timings.get(color));
        let merged = Timings {
            red: pick(Color::Red),
            yellow: pick(Color::Yellow),
            green: pick(Color::Green),
        };

        match merged.validate() {
            Ok(()) => {
                tracing::debug!(?merged, "applying lit time overrides");
                merged
            }
            Err(err) => {
                tracing::debug!(%err, "override rejected, using stored lit times");
                self.timings
            }
        }
    }
}
