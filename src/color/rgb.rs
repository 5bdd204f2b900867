//! RGB value object: three validated 8-bit channels.

use std::fmt;

use crate::component::Component;
use crate::error::ValidationError;
use crate::validate::{check_range, Violations};

/// Named-field RGB input, validated by [`RgbColor::from_input`].
///
/// This is also the shape deserialized from `{"red": .., "green": .., "blue": ..}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RgbInput {
    /// Red channel.
    pub red: Component,
    /// Green channel.
    pub green: Component,
    /// Blue channel.
    pub blue: Component,
}

impl From<[Component; 3]> for RgbInput {
    fn from([red, green, blue]: [Component; 3]) -> Self {
        Self { red, green, blue }
    }
}

/// An RGB color with 8-bit channels.
///
/// Serializes as `{"red": r, "green": g, "blue": b}`, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RgbInput"))]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Lowest legal channel value.
    pub const MIN: i64 = 0;
    /// Highest legal channel value.
    pub const MAX: i64 = 255;

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    const RANGE_MESSAGE: &'static str = "Color values must be between 0 and 255, inclusive.";

    /// Create a color from channels already known to be in range.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from arbitrary integers, rejecting any channel outside 0–255.
    ///
    /// All out-of-range channels are reported together.
    pub fn try_new(red: i64, green: i64, blue: i64) -> Result<Self, ValidationError> {
        Self::from_input(RgbInput {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
        })
    }

    /// Positional form: `[red, green, blue]`.
    pub fn from_components(components: [Component; 3]) -> Result<Self, ValidationError> {
        Self::from_input(components.into())
    }

    /// Named form. Non-integer channels and out-of-range channels are
    /// collected in the same batch.
    pub fn from_input(input: RgbInput) -> Result<Self, ValidationError> {
        let mut violations = Violations::new();

        let mut channel = |field: &'static str, component: &Component| {
            let value = violations.take(field, component.as_integer())?;
            let outcome = check_range(field, Self::MIN, Self::MAX, value);
            let valid = outcome.is_none();
            violations.record(outcome);
            valid.then_some(value as u8)
        };

        let red = channel("red", &input.red);
        let green = channel("green", &input.green);
        let blue = channel("blue", &input.blue);

        match (red, green, blue) {
            (Some(red), Some(green), Some(blue)) => Ok(Self::new(red, green, blue)),
            _ => Err(violations.into_error(Self::RANGE_MESSAGE)),
        }
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        self.red
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        self.green
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(color: RgbColor) -> Self {
        color.to_array()
    }
}

impl TryFrom<[i64; 3]> for RgbColor {
    type Error = ValidationError;

    fn try_from([red, green, blue]: [i64; 3]) -> Result<Self, Self::Error> {
        Self::try_new(red, green, blue)
    }
}

impl TryFrom<(i64, i64, i64)> for RgbColor {
    type Error = ValidationError;

    fn try_from((red, green, blue): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::try_new(red, green, blue)
    }
}

impl TryFrom<RgbInput> for RgbColor {
    type Error = ValidationError;

    fn try_from(input: RgbInput) -> Result<Self, Self::Error> {
        Self::from_input(input)
    }
}
