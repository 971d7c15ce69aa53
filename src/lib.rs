//! Trafficlight - terminal traffic light simulator
//!
//! Cycles a traffic light through red, yellow and green, drawing each phase as
//! ASCII art and holding it for its lit time until cancelled.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod light;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use cli::{Screen, ScreenClearError, TerminalScreen};
pub use light::config::{DisplayConfig, DurationsConfig, LightConfig};
pub use light::{
    Bound, Color, DurationOverrides, OverrideSource, PhaseCycler, Stopped, Timings, TrafficLight,
    ValidationError,
};
