//! Per-cycle duration overrides
//!
//! An override replaces a color's stored lit time for one cycle. Presence is
//! tracked per color; a cycle with no overrides at all uses the stored lit
//! times untouched.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tokio::sync::watch;

use crate::light::color::Color;

/// Optional replacement lit time for each color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationOverrides {
    /// Red lit time override
    pub red: Option<Duration>,
    /// Yellow lit time override
    pub yellow: Option<Duration>,
    /// Green lit time override
    pub green: Option<Duration>,
}

impl DurationOverrides {
    /// Overrides with nothing set
    #[must_use]
    pub const fn none() -> Self {
        Self {
            red: None,
            yellow: None,
            green: None,
        }
    }

    /// Set the override for one color
    #[must_use]
    pub fn with(mut self, color: Color, lit: Duration) -> Self {
        match color {
            Color::Red => self.red = Some(lit),
            Color::Yellow => self.yellow = Some(lit),
            Color::Green => self.green = Some(lit),
        }
        self
    }

    /// The override for one color, if present
    #[must_use]
    pub const fn get(&self, color: Color) -> Option<Duration> {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
        }
    }

    /// True when no color has an override
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.red.is_none() && self.yellow.is_none() && self.green.is_none()
    }
}

/// Something the cycler asks for overrides once per cycle
pub trait OverrideSource {
    /// Overrides to apply to the cycle about to start
    fn current(&mut self) -> DurationOverrides;
}

impl<T: OverrideSource + ?Sized> OverrideSource for Box<T> {
    fn current(&mut self) -> DurationOverrides {
        (**self).current()
    }
}

/// Source that never overrides anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideSource for NoOverrides {
    fn current(&mut self) -> DurationOverrides {
        DurationOverrides::none()
    }
}

/// A fixed set of overrides applied to every cycle
impl OverrideSource for DurationOverrides {
    fn current(&mut self) -> DurationOverrides {
        *self
    }
}

/// Live overrides pushed by the host through a watch channel
impl OverrideSource for watch::Receiver<DurationOverrides> {
    fn current(&mut self) -> DurationOverrides {
        *self.borrow_and_update()
    }
}

/// Parse override file contents.
///
/// Each color may be given under its name (`red`) or its override key
/// (`red-lit`), in whole seconds. Any other key is rejected.
fn parse_overrides(content: &str) -> Result<DurationOverrides> {
    let table: toml::Table = toml::from_str(content)?;

    if let Some(key) = table.keys().find(|key| {
        !Color::ALL
            .iter()
            .any(|color| *key == color.name() || *key == color.override_key())
    }) {
        bail!("unknown override key '{key}'");
    }

    let mut overrides = DurationOverrides::none();
    for color in Color::ALL {
        let Some((key, value)) = [color.name(), color.override_key()]
            .into_iter()
            .find_map(|key| table.get(key).map(|value| (key, value)))
        else {
            continue;
        };
        let secs = value
            .as_integer()
            .and_then(|n| u64::try_from(n).ok())
            .with_context(|| format!("'{key}' must be a whole number of seconds"))?;
        overrides = overrides.with(color, Duration::from_secs(secs));
    }
    Ok(overrides)
}

/// Override file re-read at the start of every cycle.
///
/// A missing file means no overrides. A file that cannot be read or parsed is
/// logged and also treated as no overrides.
#[derive(Debug, Clone)]
pub struct OverrideFile {
    path: PathBuf,
}

impl OverrideFile {
    /// Watch the override file at `path`
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the file. `Ok(None)` when it doesn't exist.
    pub fn load(&self) -> Result<Option<DurationOverrides>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read override file: {}", self.path.display()))?;
        let overrides = parse_overrides(&content)
            .with_context(|| format!("Failed to parse override file: {}", self.path.display()))?;
        Ok(Some(overrides))
    }
}

impl OverrideSource for OverrideFile {
    fn current(&mut self) -> DurationOverrides {
        match self.load() {
            Ok(overrides) => overrides.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("ignoring override file: {err:#}");
                DurationOverrides::none()
            }
        }
    }
}
