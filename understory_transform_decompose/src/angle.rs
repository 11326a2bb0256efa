// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle parsing and normalization.
//!
//! Every angle that flows through Understory's rotation helpers is normalized
//! into the half-open range `(-π, π]`. Values may be given either as raw
//! radians or as CSS-style text tagged with a unit suffix.

use alloc::format;
use alloc::string::{String, ToString};
use core::f64::consts::{PI, TAU};

use thiserror::Error;

/// Error returned when a value cannot be interpreted as an angle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AngleError {
    /// The input did not parse to a finite number of radians.
    #[error("`{0}` is not an angle value")]
    InvalidAngle(String),
}

/// Angle units accepted in textual input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    /// Radians (`rad`).
    Radians,
    /// Gradians (`grad`), 400 per turn.
    Gradians,
    /// Degrees (`deg`), 360 per turn.
    Degrees,
    /// Full turns (`turn`).
    Turns,
}

impl AngleUnit {
    // `grad` must be tried before `rad`.
    const SUFFIXES: [(&'static str, Self); 4] = [
        ("grad", Self::Gradians),
        ("rad", Self::Radians),
        ("deg", Self::Degrees),
        ("turn", Self::Turns),
    ];

    /// The CSS suffix for this unit.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Radians => "rad",
            Self::Gradians => "grad",
            Self::Degrees => "deg",
            Self::Turns => "turn",
        }
    }

    /// Multiplier converting a value in this unit into radians.
    #[must_use]
    pub const fn radians_per_unit(self) -> f64 {
        match self {
            Self::Radians => 1.0,
            Self::Gradians => PI / 200.0,
            Self::Degrees => PI / 180.0,
            Self::Turns => TAU,
        }
    }

    /// Split a textual angle into its numeric part and unit, if it has one.
    fn split(text: &str) -> (&str, Option<Self>) {
        for (suffix, unit) in Self::SUFFIXES {
            if let Some(number) = text.strip_suffix(suffix) {
                return (number, Some(unit));
            }
        }
        (text, None)
    }
}

/// An angle as supplied by a caller: raw radians or unit-tagged text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Angle<'a> {
    /// A value already expressed in radians.
    Radians(f64),
    /// Text such as `"45deg"`, `"0.25turn"`, `"100grad"`, `"1.2rad"` or a
    /// unitless number (read as radians).
    Text(&'a str),
}

impl From<f64> for Angle<'_> {
    fn from(value: f64) -> Self {
        Self::Radians(value)
    }
}

impl<'a> From<&'a str> for Angle<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl Angle<'_> {
    /// Convert to radians without normalizing.
    ///
    /// Fails with [`AngleError::InvalidAngle`] if the result is not finite.
    pub fn to_radians(self) -> Result<f64, AngleError> {
        match self {
            Self::Radians(value) => {
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(AngleError::InvalidAngle(format!("{value}")))
                }
            }
            Self::Text(text) => {
                let trimmed = text.trim();
                let (number, unit) = AngleUnit::split(trimmed);
                let value = number
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .map(|n| n * unit.map_or(1.0, AngleUnit::radians_per_unit))
                    .filter(|r| r.is_finite());
                value.ok_or_else(|| AngleError::InvalidAngle(text.to_string()))
            }
        }
    }
}

/// Normalize radians into `(-π, π]`.
///
/// The value is reduced modulo `2π`, made non-negative, and finally shifted
/// down by `2π` if it lies above `π`.
///
/// Fails with [`AngleError::InvalidAngle`] if `radians` is not finite.
pub fn normalize_radians(radians: f64) -> Result<f64, AngleError> {
    let radians = Angle::Radians(radians).to_radians()?;
    Ok(wrap(radians))
}

/// Convert any supported angle input into normalized radians.
///
/// ```rust
/// use core::f64::consts::PI;
/// use understory_transform_decompose::normalize_angle;
///
/// let a = normalize_angle("180deg").unwrap();
/// let b = normalize_angle(PI).unwrap();
/// assert!((a - b).abs() < 1e-12);
/// assert!(normalize_angle("north").is_err());
/// ```
pub fn normalize_angle<'a>(angle: impl Into<Angle<'a>>) -> Result<f64, AngleError> {
    let radians = angle.into().to_radians()?;
    Ok(wrap(radians))
}

fn wrap(radians: f64) -> f64 {
    if radians > -PI && radians <= PI {
        return radians;
    }
    let reduced = radians % TAU;
    let positive = (reduced + TAU) % TAU;
    if positive > PI { positive - TAU } else { positive }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_same_angle(a: f64, b: f64) {
        let d = wrap(a - b).abs();
        assert!(d < 1e-9, "{a} and {b} differ by {d} rad");
    }

    #[test]
    fn numbers_are_read_as_radians() {
        assert_eq!(normalize_angle(1.0).unwrap(), 1.0);
        assert_eq!(normalize_angle("1.0").unwrap(), 1.0);
        assert_eq!(normalize_angle("1.0rad").unwrap(), 1.0);
    }

    #[test]
    fn grad_is_not_mistaken_for_rad() {
        assert_same_angle(normalize_angle("200grad").unwrap(), PI);
        assert_same_angle(normalize_angle("100grad").unwrap(), PI / 2.0);
    }

    #[test]
    fn units_agree_on_half_turn() {
        let pi = normalize_angle(PI).unwrap();
        for text in ["180deg", "200grad", "0.5turn", "3.141592653589793rad"] {
            assert_same_angle(normalize_angle(text).unwrap(), pi);
        }
    }

    #[test]
    fn range_is_half_open() {
        assert_eq!(normalize_radians(PI).unwrap(), PI);
        assert_eq!(normalize_radians(-PI).unwrap(), PI);
        assert_eq!(normalize_radians(0.0).unwrap(), 0.0);
        assert!((normalize_radians(3.0 * PI / 2.0).unwrap() + PI / 2.0).abs() < 1e-12);
        assert!((normalize_radians(-5.0 * PI / 2.0).unwrap() + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut x = -20.0;
        while x < 20.0 {
            let once = normalize_radians(x).unwrap();
            let twice = normalize_radians(once).unwrap();
            assert!(once > -PI && once <= PI, "{once} out of range for input {x}");
            assert!((once - twice).abs() < 1e-12, "not idempotent at {x}");
            x += 0.137;
        }
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_same_angle(normalize_angle("  90deg ").unwrap(), PI / 2.0);
        assert_same_angle(normalize_angle("-90 deg").unwrap(), -PI / 2.0);
    }

    #[test]
    fn invalid_values_fail_fast() {
        assert_eq!(
            normalize_angle("north"),
            Err(AngleError::InvalidAngle("north".into()))
        );
        assert!(normalize_angle("deg").is_err());
        assert!(normalize_angle("").is_err());
        assert!(normalize_angle(f64::NAN).is_err());
        assert!(normalize_angle(f64::INFINITY).is_err());
        assert!(normalize_angle("1e400deg").is_err());
    }

    #[test]
    fn unit_suffixes_round_trip() {
        for unit in [
            AngleUnit::Radians,
            AngleUnit::Gradians,
            AngleUnit::Degrees,
            AngleUnit::Turns,
        ] {
            let (number, parsed) = AngleUnit::split(unit.suffix());
            assert_eq!(number, "");
            assert_eq!(parsed, Some(unit));
        }
    }
}
