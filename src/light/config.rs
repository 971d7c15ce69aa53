//! Configuration file parser
//!
//! Parses `trafficlight.toml` into default lit times and display settings.
//! Lit times are whole seconds and may be left out; anything missing is
//! taken from the command line or asked for interactively.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::screen::DEFAULT_HINT;
use crate::light::color::Color;

/// Lit times in seconds, any of which may be unset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DurationsConfig {
    /// Red lit time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<u64>,
    /// Yellow lit time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow: Option<u64>,
    /// Green lit time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<u64>,
}

impl DurationsConfig {
    /// Seconds configured for one color
    #[must_use]
    pub const fn get(&self, color: Color) -> Option<u64> {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
        }
    }

    /// Fill every unset color from `fallback`
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            red: self.red.or(fallback.red),
            yellow: self.yellow.or(fallback.yellow),
            green: self.green.or(fallback.green),
        }
    }
}

/// How phases are drawn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Line shown under every phase; empty for none
    #[serde(default = "default_hint")]
    pub hint: String,
    /// Color the lit lamp
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_hint() -> String {
    DEFAULT_HINT.to_string()
}

const fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hint: default_hint(),
            color: default_color(),
        }
    }
}

/// Top-level configuration parsed from trafficlight.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LightConfig {
    /// Default lit times
    #[serde(default)]
    pub durations: DurationsConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl LightConfig {
    /// Parse a trafficlight.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse trafficlight.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse trafficlight.toml")
    }

    /// The hint to draw, or `None` when it is blank
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        let hint = self.display.hint.trim();
        (!hint.is_empty()).then_some(hint)
    }
}
