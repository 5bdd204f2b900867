//! Color value objects.
//!
//! Three interchangeable representations, each validated at construction:
//!
//! - [`RgbColor`]: 8-bit red, green and blue channels
//! - [`CssHexColor`]: `#RGB` or `#RRGGBB`, stored uppercase
//! - [`HslColor`]: hue in degrees, saturation and lightness in percent
//!
//! Conversions between them live in [`crate::convert`].

mod hex;
mod hsl;
mod rgb;

pub use hex::CssHexColor;
pub use hsl::{HslColor, HslInput};
pub use rgb::{RgbColor, RgbInput};
