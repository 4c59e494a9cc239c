//! Parsers for driver command-line options
//!
//! Each parser takes the raw argument text and returns the value or a
//! message, the shape `clap` expects from a `value_parser`.

use std::time::Duration;

/// Grid edge length, at least 1
///
/// # Errors
///
/// Returns a message for non-numeric input or zero.
pub fn parse_grid_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("grid size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}

/// Spread probability in `[0, 1]`
///
/// # Errors
///
/// Returns a message for non-numeric input or a value outside the range.
pub fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("probability must be between 0 and 1, got {p}"))
    }
}

/// Non-negative, finite number of seconds.
///
/// The value is not clamped here; the engine clamps tick intervals into
/// its own bounds.
///
/// # Errors
///
/// Returns a message for non-numeric, negative or non-finite input.
pub fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid duration {secs}s: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size() {
        assert_eq!(parse_grid_size("100"), Ok(100));
        assert_eq!(parse_grid_size("1"), Ok(1));
        assert!(parse_grid_size("0").is_err());
        assert!(parse_grid_size("-4").is_err());
        assert!(parse_grid_size("big").is_err());
    }

    #[test]
    fn test_probability_range() {
        assert_eq!(parse_probability("0"), Ok(0.0));
        assert_eq!(parse_probability("0.55"), Ok(0.55));
        assert_eq!(parse_probability("1"), Ok(1.0));
        assert!(parse_probability("5").is_err());
        assert!(parse_probability("-0.1").is_err());
        assert!(parse_probability("NaN").is_err());
        assert!(parse_probability("half").is_err());
    }

    #[test]
    fn test_seconds() {
        assert_eq!(parse_seconds("0.01"), Ok(Duration::from_millis(10)));
        assert_eq!(parse_seconds("2"), Ok(Duration::from_secs(2)));
        assert!(parse_seconds("-3").is_err());
        assert!(parse_seconds("NaN").is_err());
        assert!(parse_seconds("inf").is_err());
        assert!(parse_seconds("soon").is_err());
    }
}
