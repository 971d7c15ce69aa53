//! Interactive lit-time prompt
//!
//! Asks for each missing lit time on the terminal, one color at a time. An
//! entry that isn't a whole number of seconds is reported and asked again.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::light::color::Color;
use crate::light::config::DurationsConfig;
use crate::light::traffic_light::Timings;

/// Reading lit times from the user failed
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended before a value was given
    #[error("input closed before a {0} light duration was entered")]
    Closed(Color),
    /// Reading or writing the terminal failed
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Ask for one color's lit time until a whole number of seconds is entered.
pub fn prompt_seconds<R, W>(input: &mut R, output: &mut W, color: Color) -> Result<u64, PromptError>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "How long should the {color} light be lit in seconds: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed(color));
        }

        let entered = line.trim();
        match entered.parse::<u64>() {
            Ok(secs) => return Ok(secs),
            Err(_) => writeln!(output, "failed to convert {entered} to integer")?,
        }
    }
}

/// Complete `known` by prompting for every color it lacks, in cycle order.
pub fn prompt_missing<R, W>(
    input: &mut R,
    output: &mut W,
    known: DurationsConfig,
) -> Result<Timings, PromptError>
where
    R: BufRead,
    W: Write,
{
    let mut secs = [0; 3];
    for (slot, color) in secs.iter_mut().zip(Color::ALL) {
        *slot = match known.get(color) {
            Some(value) => value,
            None => prompt_seconds(input, output, color)?,
        };
    }
    Ok(Timings::from_secs(secs[0], secs[1], secs[2]))
}
