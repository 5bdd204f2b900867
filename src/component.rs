//! Loosely typed color component input and its normalization.
//!
//! Callers may hand over a channel or geometry value as an integer, a
//! floating-point number or text such as `"50%"`. Normalization turns a
//! [`Component`] into the canonical integer form, or into a type violation,
//! strictly before any range check runs.

use std::fmt;

use crate::error::Violation;

/// A single raw color component, prior to normalization.
///
/// With the `serde` feature this deserializes untagged, so JSON `50`, `49.5`
/// and `"50%"` are all accepted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Component {
    /// A whole number.
    Integer(i64),
    /// A floating-point number.
    Number(f64),
    /// Text, e.g. `"50%"` or `"195"`.
    Text(String),
}

impl Component {
    /// Normalizes to an integer.
    ///
    /// Floating-point input is rejected even when it has no fractional part,
    /// so `1.0` and `1` are not interchangeable. Text must hold a plain
    /// decimal integer.
    pub fn as_integer(&self) -> Result<i64, Violation> {
        match self {
            Self::Integer(value) => Ok(*value),
            Self::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| Violation::NotAnInteger(self.to_string())),
            Self::Number(_) => Err(Violation::NotAnInteger(self.to_string())),
        }
    }

    /// Normalizes to a whole percentage.
    ///
    /// Accepts integers, finite numbers and text with an optional trailing
    /// `%`. Fractional percentages are rounded half away from zero. The value
    /// is taken to already be on the 0–100 scale; no fraction rescaling.
    pub fn as_percentage(&self) -> Result<i64, Violation> {
        let value = match self {
            Self::Integer(value) => return Ok(*value),
            Self::Number(value) => *value,
            Self::Text(text) => {
                let text = text.trim();
                let digits = text.strip_suffix('%').unwrap_or(text).trim_end();
                digits
                    .parse::<f64>()
                    .map_err(|_| Violation::NotAPercentage(self.to_string()))?
            }
        };

        if !value.is_finite() || value.abs() > i64::MAX as f64 {
            return Err(Violation::NotAPercentage(self.to_string()));
        }

        Ok(value.round() as i64)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value:?}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Component {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, i8, i16, i32, i64);

impl From<f32> for Component {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<f64> for Component {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
