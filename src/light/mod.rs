//! Traffic light simulation
//!
//! This module holds the light itself, lit-time validation, overrides
//! and the phase cycler.

pub mod color;
pub mod config;
pub mod cycler;
pub mod overrides;
pub mod traffic_light;
pub mod validate;

pub use color::Color;
pub use cycler::{PhaseCycler, Stopped};
pub use overrides::{DurationOverrides, NoOverrides, OverrideFile, OverrideSource};
pub use traffic_light::{Timings, TrafficLight};
pub use validate::{validate, Bound, ValidationError};
