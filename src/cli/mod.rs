//! Terminal collaborators
//!
//! Artwork, the clear-and-draw screen, and the interactive lit-time prompt.

pub mod art;
pub mod prompt;
pub mod screen;

pub use prompt::{prompt_missing, prompt_seconds, PromptError};
pub use screen::{Screen, ScreenClearError, TerminalScreen, DEFAULT_HINT};
