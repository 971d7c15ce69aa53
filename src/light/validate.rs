//! Lit-time validation
//!
//! Checks a red/yellow/green duration triple against fixed operating bounds
//! before a [`TrafficLight`](crate::light::TrafficLight) may be built from it.
//! Bounds are inclusive and checked in a fixed order; the first violation wins.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::light::color::Color;

const FIVE_SECONDS: Duration = Duration::from_secs(5);
const THIRTY_SECONDS: Duration = Duration::from_secs(30);
const TEN_MINUTES: Duration = Duration::from_secs(10 * 60);

/// Inclusive lit-time range for one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LitBounds {
    /// Color the range applies to
    pub color: Color,
    /// Shortest allowed lit time
    pub min: Duration,
    /// Longest allowed lit time
    pub max: Duration,
}

/// Per-color bounds, in checking order.
pub const BOUNDS: [LitBounds; 3] = [
    LitBounds {
        color: Color::Red,
        min: FIVE_SECONDS,
        max: TEN_MINUTES,
    },
    LitBounds {
        color: Color::Yellow,
        min: FIVE_SECONDS,
        max: THIRTY_SECONDS,
    },
    LitBounds {
        color: Color::Green,
        min: FIVE_SECONDS,
        max: TEN_MINUTES,
    },
];

/// Which side of a range was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Duration was below the minimum
    Lower,
    /// Duration was above the maximum
    Upper,
}

/// A lit time outside its color's bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{color} light duration must be {} {bound}", format_limit(.limit))]
pub struct ValidationError {
    /// Offending color
    pub color: Color,
    /// Violated side of the range
    pub bound: Bound,
    /// The limit that was crossed
    pub limit: Duration,
    /// The rejected duration
    pub actual: Duration,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => f.write_str("or more"),
            Self::Upper => f.write_str("or less"),
        }
    }
}

/// Human form of a bound: "5 seconds", "10 minutes".
#[allow(clippy::trivially_copy_pass_by_ref)]
fn format_limit(limit: &Duration) -> String {
    let secs = limit.as_secs();
    if secs >= 60 && secs % 60 == 0 {
        format!("{} minutes", secs / 60)
    } else {
        format!("{secs} seconds")
    }
}

/// Bounds for a single color.
#[must_use]
pub fn bounds_for(color: Color) -> LitBounds {
    match color {
        Color::Red => BOUNDS[0],
        Color::Yellow => BOUNDS[1],
        Color::Green => BOUNDS[2],
    }
}

/// Validate a red/yellow/green lit-time triple.
///
/// Checks red, then yellow, then green; for each the lower bound before the
/// upper bound. Returns the first violation found.
pub fn validate(red: Duration, yellow: Duration, green: Duration) -> Result<(), ValidationError> {
    let values = [red, yellow, green];
    for (bounds, actual) in BOUNDS.iter().zip(values) {
        if actual < bounds.min {
            return Err(ValidationError {
                color: bounds.color,
                bound: Bound::Lower,
                limit: bounds.min,
                actual,
            });
        }
        if actual > bounds.max {
            return Err(ValidationError {
                color: bounds.color,
                bound: Bound::Upper,
                limit: bounds.max,
                actual,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_accepts_typical_triple() {
        assert!(validate(secs(10), secs(5), secs(10)).is_ok());
    }

    #[test]
    fn test_accepts_inclusive_bounds() {
        assert!(validate(secs(5), secs(5), secs(5)).is_ok());
        assert!(validate(TEN_MINUTES, THIRTY_SECONDS, TEN_MINUTES).is_ok());
    }

    #[test]
    fn test_rejects_short_yellow() {
        let err = validate(secs(10), secs(3), secs(10)).unwrap_err();
        assert_eq!(err.color, Color::Yellow);
        assert_eq!(err.bound, Bound::Lower);
        assert_eq!(err.limit, secs(5));
        assert_eq!(err.actual, secs(3));
    }

    #[test]
    fn test_rejects_long_yellow() {
        let err = validate(secs(10), secs(31), secs(10)).unwrap_err();
        assert_eq!((err.color, err.bound), (Color::Yellow, Bound::Upper));
    }

    #[test]
    fn test_rejects_long_red_and_green() {
        let over = TEN_MINUTES + Duration::from_nanos(1);
        let err = validate(over, secs(5), secs(5)).unwrap_err();
        assert_eq!((err.color, err.bound), (Color::Red, Bound::Upper));

        let err = validate(secs(5), secs(5), over).unwrap_err();
        assert_eq!((err.color, err.bound), (Color::Green, Bound::Upper));
    }

    #[test]
    fn test_one_unit_below_minimum_rejected() {
        let under = secs(5) - Duration::from_nanos(1);
        let err = validate(secs(5), secs(5), under).unwrap_err();
        assert_eq!((err.color, err.bound), (Color::Green, Bound::Lower));
    }

    #[test]
    fn test_first_violation_wins() {
        // Red upper is checked before yellow lower and green lower.
        let err = validate(secs(601), secs(1), secs(1)).unwrap_err();
        assert_eq!((err.color, err.bound), (Color::Red, Bound::Upper));

        // Yellow upper is checked before green lower.
        let err = validate(secs(5), secs(60), secs(0)).unwrap_err();
        assert_eq!((err.color, err.bound), (Color::Yellow, Bound::Upper));
    }

    #[test]
    fn test_error_messages() {
        let err = validate(secs(1), secs(5), secs(5)).unwrap_err();
        assert_eq!(err.to_string(), "red light duration must be 5 seconds or more");

        let err = validate(secs(5), secs(5), secs(700)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "green light duration must be 10 minutes or less"
        );

        let err = validate(secs(5), secs(45), secs(5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "yellow light duration must be 30 seconds or less"
        );
    }

    #[test]
    fn test_bounds_for_matches_table() {
        for bounds in BOUNDS {
            assert_eq!(bounds_for(bounds.color), bounds);
        }
    }
}
