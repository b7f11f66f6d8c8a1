//! Whole-unit rounding applied when the round-up flag is set.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::calculator::TipError;

/// How a tip is rounded to a whole currency unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round to the nearest whole unit, ties away from zero (`f64::round`).
    #[default]
    Nearest,
    /// Always round towards positive infinity (`f64::ceil`).
    Up,
}

impl RoundingMode {
    /// Round `value` to a whole unit.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Nearest => value.round(),
            Self::Up => value.ceil(),
        }
    }

    /// Names accepted by [`RoundingMode::from_str`].
    #[must_use]
    pub fn available() -> Vec<&'static str> {
        vec!["nearest", "up"]
    }
}

impl FromStr for RoundingMode {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "round" => Ok(Self::Nearest),
            "up" | "ceil" | "ceiling" => Ok(Self::Up),
            other => Err(TipError::Config(format!(
                "unknown rounding mode: {other} (expected one of: {})",
                Self::available().join(", ")
            ))),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => f.write_str("nearest"),
            Self::Up => f.write_str("up"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_rounds_both_ways() {
        assert!((RoundingMode::Nearest.apply(3.3) - 3.0).abs() < f64::EPSILON);
        assert!((RoundingMode::Nearest.apply(3.7) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nearest_ties_away_from_zero() {
        assert!((RoundingMode::Nearest.apply(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((RoundingMode::Nearest.apply(-2.5) + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn up_is_ceiling() {
        assert!((RoundingMode::Up.apply(3.01) - 4.0).abs() < f64::EPSILON);
        assert!((RoundingMode::Up.apply(9.0) - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_is_nearest() {
        assert_eq!(RoundingMode::default(), RoundingMode::Nearest);
    }

    #[test]
    fn parse_names() {
        assert_eq!("nearest".parse::<RoundingMode>().unwrap(), RoundingMode::Nearest);
        assert_eq!("UP".parse::<RoundingMode>().unwrap(), RoundingMode::Up);
        assert_eq!(" ceil ".parse::<RoundingMode>().unwrap(), RoundingMode::Up);
    }

    #[test]
    fn parse_unknown_is_config_error() {
        let err = "floor".parse::<RoundingMode>().unwrap_err();
        assert!(matches!(err, TipError::Config(_)));
        assert!(err.to_string().contains("floor"));
    }

    #[test]
    fn display_round_trips() {
        for name in RoundingMode::available() {
            let mode: RoundingMode = name.parse().unwrap();
            assert_eq!(mode.to_string(), name);
        }
    }
}
