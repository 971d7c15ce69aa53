//! Shared test utilities
//!
//! A recording [`Screen`] used by the cycler tests. Only compiled in test builds.

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::cli::screen::{Screen, ScreenClearError};
use crate::light::color::Color;

/// Something the recording screen saw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A successful clear
    Clear,
    /// A render: color, hint and the (virtual) time it happened
    Render(Color, Option<String>, Instant),
}

enum Trigger {
    Color(Color),
    Count(u64),
}

struct Hook {
    trigger: Trigger,
    action: Box<dyn FnMut() + Send>,
}

/// Screen that records clears and renders instead of drawing.
#[derive(Default)]
pub struct RecordingScreen {
    events: Vec<Event>,
    clears: usize,
    renders: u64,
    fail_clear_after: Option<usize>,
    hooks: Vec<Hook>,
}

impl RecordingScreen {
    /// An empty recorder whose clears always succeed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `successes` clears succeed, then fail every one after.
    #[must_use]
    pub fn fail_clear_after(mut self, successes: usize) -> Self {
        self.fail_clear_after = Some(successes);
        self
    }

    /// Run `action` whenever `color` is rendered
    #[must_use]
    pub fn on_render(mut self, color: Color, action: impl FnMut() + Send + 'static) -> Self {
        self.hooks.push(Hook {
            trigger: Trigger::Color(color),
            action: Box::new(action),
        });
        self
    }

    /// Cancel when `color` is rendered
    #[must_use]
    pub fn cancel_on_render(self, color: Color, cancel: CancellationToken) -> Self {
        self.on_render(color, move || cancel.cancel())
    }

    /// Cancel right after the `count`-th render
    #[must_use]
    pub fn cancel_after_renders(mut self, count: u64, cancel: CancellationToken) -> Self {
        self.hooks.push(Hook {
            trigger: Trigger::Count(count),
            action: Box::new(move || cancel.cancel()),
        });
        self
    }

    /// Everything recorded so far
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Rendered colors in order
    #[must_use]
    pub fn colors(&self) -> Vec<Color> {
        self.renders().into_iter().map(|(color, _)| color).collect()
    }

    /// Rendered colors with the instant of each render
    #[must_use]
    pub fn renders(&self) -> Vec<(Color, Instant)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Render(color, _, at) => Some((*color, *at)),
                Event::Clear => None,
            })
            .collect()
    }
}

impl Screen for RecordingScreen {
    fn clear(&mut self) -> Result<(), ScreenClearError> {
        if self.fail_clear_after.is_some_and(|n| self.clears >= n) {
            return Err(ScreenClearError::Io(std::io::Error::other(
                "clear: terminal unavailable",
            )));
        }
        self.clears += 1;
        self.events.push(Event::Clear);
        Ok(())
    }

    fn render(&mut self, color: Color, hint: Option<&str>) {
        self.renders += 1;
        self.events
            .push(Event::Render(color, hint.map(str::to_string), Instant::now()));
        let renders = self.renders;
        for hook in &mut self.hooks {
            let fire = match hook.trigger {
                Trigger::Color(c) => c == color,
                Trigger::Count(n) => n == renders,
            };
            if fire {
                (hook.action)();
            }
        }
    }
}
