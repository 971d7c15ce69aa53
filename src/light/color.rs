//! Signal colors
//!
//! The three phases a traffic light cycles through. A `Color` doubles as the
//! phase identity inside the run loop and as the key for per-color bounds and
//! overrides.

use std::fmt;

/// One of the three lamps of a traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Stop
    Red,
    /// Prepare to stop
    Yellow,
    /// Go
    Green,
}

impl Color {
    /// All colors in cycle order, starting from the initial phase.
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    /// The phase that follows this one: Red → Yellow → Green → Red.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Green,
            Self::Green => Self::Red,
        }
    }

    /// Lowercase name used in messages and config keys
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }

    /// Key under which an override for this color is looked up (e.g. `red-lit`)
    #[must_use]
    pub const fn override_key(self) -> &'static str {
        match self {
            Self::Red => "red-lit",
            Self::Yellow => "yellow-lit",
            Self::Green => "green-lit",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(Color::Red.next(), Color::Yellow);
        assert_eq!(Color::Yellow.next(), Color::Green);
        assert_eq!(Color::Green.next(), Color::Red);
    }

    #[test]
    fn test_all_starts_with_red_and_follows_next() {
        assert_eq!(Color::ALL[0], Color::Red);
        for pair in Color::ALL.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
        }
    }

    #[test]
    fn test_names_and_keys() {
        assert_eq!(Color::Yellow.to_string(), "yellow");
        assert_eq!(Color::Green.override_key(), "green-lit");
    }
}
