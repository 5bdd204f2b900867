//! Unified entry point over the three color representations.
//!
//! A [`ColorSpeaker`] keeps exactly the representation it was built from and
//! validates only that one. Every other representation is derived on demand
//! through [`crate::convert`].
//!
//! ```rust
//! use color_speaker::ColorSpeaker;
//!
//! let color = ColorSpeaker::from_rgb(123, 111, 55).unwrap();
//! assert_eq!(color.to_string(), "rgb(123, 111, 55)");
//! assert_eq!(color.to_hex_code().to_string(), "#7B6F37");
//! ```

use std::fmt;

use crate::color::{CssHexColor, HslColor, RgbColor};
use crate::component::Component;
use crate::convert;
use crate::error::ValidationError;

/// The representation a [`ColorSpeaker`] was constructed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Built from red, green and blue channels.
    Rgb(RgbColor),
    /// Built from a CSS hex code.
    Hex(CssHexColor),
    /// Built from hue, saturation and lightness.
    Hsl(HslColor),
}

/// A color that can be rendered as RGB, CSS hex or HSL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorSpeaker {
    representation: Representation,
}

impl ColorSpeaker {
    /// Create from red, green and blue channels (each 0–255).
    pub fn from_rgb(red: i64, green: i64, blue: i64) -> Result<Self, ValidationError> {
        RgbColor::try_new(red, green, blue).map(Self::from)
    }

    /// Create from a `#RGB` or `#RRGGBB` hex code.
    pub fn from_hex_code(hex: &str) -> Result<Self, ValidationError> {
        CssHexColor::new(hex).map(Self::from)
    }

    /// Create from hue (degrees), saturation and lightness (percent).
    ///
    /// Saturation and lightness may be numbers or `"NN%"` text.
    pub fn from_hsl(
        hue: impl Into<Component>,
        saturation: impl Into<Component>,
        lightness: impl Into<Component>,
    ) -> Result<Self, ValidationError> {
        HslColor::try_new(hue, saturation, lightness).map(Self::from)
    }

    /// The representation this color was built from.
    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    /// This color as RGB.
    pub fn to_rgb(&self) -> RgbColor {
        match &self.representation {
            Representation::Rgb(rgb) => *rgb,
            Representation::Hex(hex) => convert::hex_to_rgb(hex),
            Representation::Hsl(hsl) => convert::hsl_to_rgb(*hsl),
        }
    }

    /// This color as a CSS hex code.
    ///
    /// A color built from a hex code returns it unchanged, shorthand included.
    pub fn to_hex_code(&self) -> CssHexColor {
        match &self.representation {
            Representation::Rgb(rgb) => convert::rgb_to_hex(*rgb),
            Representation::Hex(hex) => hex.clone(),
            Representation::Hsl(hsl) => convert::rgb_to_hex(convert::hsl_to_rgb(*hsl)),
        }
    }

    /// This color as HSL.
    pub fn to_hsl(&self) -> HslColor {
        match &self.representation {
            Representation::Rgb(rgb) => convert::rgb_to_hsl(*rgb),
            Representation::Hex(hex) => convert::rgb_to_hsl(convert::hex_to_rgb(hex)),
            Representation::Hsl(hsl) => *hsl,
        }
    }
}

impl fmt::Display for ColorSpeaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.representation {
            Representation::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Representation::Hex(hex) => fmt::Display::fmt(hex, f),
            Representation::Hsl(hsl) => fmt::Display::fmt(hsl, f),
        }
    }
}

impl From<RgbColor> for ColorSpeaker {
    fn from(rgb: RgbColor) -> Self {
        Self {
            representation: Representation::Rgb(rgb),
        }
    }
}

impl From<CssHexColor> for ColorSpeaker {
    fn from(hex: CssHexColor) -> Self {
        Self {
            representation: Representation::Hex(hex),
        }
    }
}

impl From<HslColor> for ColorSpeaker {
    fn from(hsl: HslColor) -> Self {
        Self {
            representation: Representation::Hsl(hsl),
        }
    }
}

impl From<Representation> for ColorSpeaker {
    fn from(representation: Representation) -> Self {
        Self { representation }
    }
}
