//! Typed style-value grammar for tween targets.
//!
//! A tween target value is written as `[+|-][=]<magnitude><unit>`:
//! a leading sign marks a relative adjustment, no sign means an
//! absolute target. Malformed input is a reported parse error, never
//! a silent fallback.

use serde::{Deserialize, Serialize};

/// Parse failure for a style value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueParseError {
    #[error("empty style value")]
    Empty,

    #[error("style value '{0}' has no magnitude")]
    MissingMagnitude(String),

    #[error("style value '{0}' has an invalid magnitude")]
    InvalidMagnitude(String),

    #[error("style value '{0}' has an invalid unit")]
    InvalidUnit(String),
}

/// Direction of a relative adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Positive,
    Negative,
}

/// A parsed tween target: relative delta or absolute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyleDelta {
    /// Signed adjustment relative to the current value.
    Relative {
        sign: Sign,
        magnitude: f64,
        unit: String,
    },
    /// Absolute target value.
    Absolute { magnitude: f64, unit: String },
}

impl StyleDelta {
    /// Parse a style value string.
    pub fn parse(input: &str) -> Result<StyleDelta, ValueParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValueParseError::Empty);
        }

        let (sign, rest) = match s.as_bytes()[0] {
            b'+' => (Some(Sign::Positive), &s[1..]),
            b'-' => (Some(Sign::Negative), &s[1..]),
            _ => (None, s),
        };
        let rest = rest.strip_prefix('=').unwrap_or(rest);

        let split = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (magnitude_str, unit) = rest.split_at(split);

        if magnitude_str.is_empty() {
            return Err(ValueParseError::MissingMagnitude(input.to_string()));
        }
        let magnitude: f64 = magnitude_str
            .parse()
            .map_err(|_| ValueParseError::InvalidMagnitude(input.to_string()))?;
        if !unit.is_empty() && !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
            return Err(ValueParseError::InvalidUnit(input.to_string()));
        }

        Ok(match sign {
            Some(sign) => StyleDelta::Relative {
                sign,
                magnitude,
                unit: unit.to_string(),
            },
            None => StyleDelta::Absolute {
                magnitude,
                unit: unit.to_string(),
            },
        })
    }

    /// A `+=` pixel delta.
    pub fn relative_positive_px(magnitude: f64) -> Self {
        StyleDelta::Relative {
            sign: Sign::Positive,
            magnitude,
            unit: "px".to_string(),
        }
    }

    /// A `-=` pixel delta.
    pub fn relative_negative_px(magnitude: f64) -> Self {
        StyleDelta::Relative {
            sign: Sign::Negative,
            magnitude,
            unit: "px".to_string(),
        }
    }

    /// Unsigned magnitude of the delta.
    pub fn magnitude(&self) -> f64 {
        match self {
            StyleDelta::Relative { magnitude, .. } | StyleDelta::Absolute { magnitude, .. } => {
                *magnitude
            }
        }
    }

    /// Unit suffix ("" when none was given).
    pub fn unit(&self) -> &str {
        match self {
            StyleDelta::Relative { unit, .. } | StyleDelta::Absolute { unit, .. } => unit,
        }
    }
}

/// A concrete style write: position plus unit suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleValue {
    pub position: f64,
    pub unit: String,
}

impl StyleValue {
    pub fn new(position: f64, unit: impl Into<String>) -> Self {
        Self {
            position,
            unit: unit.into(),
        }
    }

    /// A pixel-unit value.
    pub fn px(position: f64) -> Self {
        Self::new(position, "px")
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.position, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative_positive() {
        let delta = StyleDelta::parse("+=150px").unwrap();
        assert_eq!(
            delta,
            StyleDelta::Relative {
                sign: Sign::Positive,
                magnitude: 150.0,
                unit: "px".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_relative_negative_without_equals() {
        let delta = StyleDelta::parse("-42.5em").unwrap();
        assert_eq!(
            delta,
            StyleDelta::Relative {
                sign: Sign::Negative,
                magnitude: 42.5,
                unit: "em".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_absolute() {
        let delta = StyleDelta::parse("150px").unwrap();
        assert_eq!(
            delta,
            StyleDelta::Absolute {
                magnitude: 150.0,
                unit: "px".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_unitless() {
        let delta = StyleDelta::parse("0.5").unwrap();
        assert_eq!(delta.magnitude(), 0.5);
        assert_eq!(delta.unit(), "");
    }

    #[test]
    fn test_parse_percent_unit() {
        let delta = StyleDelta::parse("+=30%").unwrap();
        assert_eq!(delta.unit(), "%");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(StyleDelta::parse(""), Err(ValueParseError::Empty));
        assert_eq!(StyleDelta::parse("   "), Err(ValueParseError::Empty));
        assert!(matches!(
            StyleDelta::parse("+=px"),
            Err(ValueParseError::MissingMagnitude(_))
        ));
        assert!(matches!(
            StyleDelta::parse("abc"),
            Err(ValueParseError::MissingMagnitude(_))
        ));
        assert!(matches!(
            StyleDelta::parse("1.2.3px"),
            Err(ValueParseError::InvalidMagnitude(_))
        ));
        assert!(matches!(
            StyleDelta::parse("10p!x"),
            Err(ValueParseError::InvalidUnit(_))
        ));
    }

    #[test]
    fn test_style_value_display() {
        assert_eq!(StyleValue::px(-150.0).to_string(), "-150px");
        assert_eq!(StyleValue::new(0.0, "").to_string(), "0");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_accepts_any_signed_pixel_delta(magnitude in 0.0_f64..10_000.0) {
                let rendered = format!("+={magnitude}px");
                let delta = StyleDelta::parse(&rendered).unwrap();
                prop_assert!((delta.magnitude() - magnitude).abs() < 1e-9);
                prop_assert_eq!(delta.unit(), "px");
            }

            #[test]
            fn parse_never_panics(input in ".{0,24}") {
                let _ = StyleDelta::parse(&input);
            }
        }
    }
}
