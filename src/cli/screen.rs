//! Terminal display surface
//!
//! The cycler draws through the [`Screen`] trait: clear the surface, then
//! render one phase. [`TerminalScreen`] clears by running the `clear` command
//! and writes the artwork to any line-oriented writer, normally stdout.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use colored::Colorize;
use thiserror::Error;

use crate::cli::art::{artwork, lamp_fill};
use crate::light::color::Color;

/// Default hint line shown under every phase
pub const DEFAULT_HINT: &str = "Press CTRL + C to exit";

/// The display surface could not be cleared
#[derive(Debug, Error)]
pub enum ScreenClearError {
    /// The clear command could not be run
    #[error("failed to clear screen: {0}")]
    Io(#[from] io::Error),
    /// The clear command ran but reported failure
    #[error("clear command exited with {0}")]
    Status(ExitStatus),
}

/// Output surface for the phase cycler
pub trait Screen {
    /// Blank the surface before the next phase is drawn
    fn clear(&mut self) -> Result<(), ScreenClearError>;

    /// Draw a phase's artwork, followed by the hint line if one is given
    fn render(&mut self, color: Color, hint: Option<&str>);
}

/// Screen backed by a real terminal
pub struct TerminalScreen<W: Write> {
    out: W,
    clear_command: String,
    colorize: bool,
}

impl TerminalScreen<io::Stdout> {
    /// Screen on the process's stdout
    #[must_use]
    pub fn stdout(colorize: bool) -> Self {
        Self::new(io::stdout(), colorize)
    }
}

impl<W: Write> TerminalScreen<W> {
    /// Screen writing to `out`, cleared with the `clear` command
    #[must_use]
    pub fn new(out: W, colorize: bool) -> Self {
        Self {
            out,
            clear_command: "clear".to_string(),
            colorize,
        }
    }

    /// Use a different program to clear the terminal
    #[must_use]
    pub fn with_clear_command(mut self, command: &str) -> Self {
        self.clear_command = command.to_string();
        self
    }

    /// Consume the screen and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_phase(&mut self, color: Color, hint: Option<&str>) -> io::Result<()> {
        let mut text = artwork(color);
        if self.colorize {
            let fill = lamp_fill(color);
            let lit = match color {
                Color::Red => fill.red().bold(),
                Color::Yellow => fill.yellow().bold(),
                Color::Green => fill.green().bold(),
            };
            text = text.replace(fill, &lit.to_string());
        }
        writeln!(self.out, "{text}")?;
        if let Some(hint) = hint {
            writeln!(self.out, "\n{hint}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn clear(&mut self) -> Result<(), ScreenClearError> {
        // Anything still buffered must land before the screen is wiped.
        if let Err(err) = self.out.flush() {
            tracing::warn!("failed to flush output before clear: {err}");
        }
        let status = Command::new(&self.clear_command)
            .stdout(Stdio::inherit())
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(ScreenClearError::Status(status))
        }
    }

    fn render(&mut self, color: Color, hint: Option<&str>) {
        if let Err(err) = self.write_phase(color, hint) {
            tracing::warn!("failed to draw {color} phase: {err}");
        }
    }
}
