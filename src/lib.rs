//! # Color-Speaker
//!
//! Validated color values in three interchangeable notations, with pure
//! conversions between them.
//!
//! ## Features
//!
//! - **Validated value objects**: [`RgbColor`], [`CssHexColor`] and [`HslColor`]
//!   can never hold an out-of-range or malformed value
//! - **Complete error reports**: every invalid field is reported at once,
//!   keyed by field name
//! - **Lossless conversion**: RGB and hex round-trip exactly; HSL round-trips
//!   within the rounding of whole degrees and whole percentages
//! - **One entry point**: [`ColorSpeaker`] accepts any notation and renders any other
//!
//! ## Quick Start
//!
//! ```rust
//! use color_speaker::ColorSpeaker;
//!
//! let color = ColorSpeaker::from_rgb(123, 111, 55)?;
//! assert_eq!(format!(".box {{ background-color: {color}; }}"),
//!            ".box { background-color: rgb(123, 111, 55); }");
//! assert_eq!(color.to_hex_code().to_string(), "#7B6F37");
//!
//! let color = ColorSpeaker::from_hex_code("#7B6F37")?;
//! assert_eq!(color.to_rgb().to_array(), [123, 111, 55]);
//! # Ok::<(), color_speaker::ValidationError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for the value objects.
//!   [`RgbColor`] serializes as `{"red": .., "green": .., "blue": ..}`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

// ============================================================================
// Value Objects
// ============================================================================

/// Color value objects: RGB, CSS hex and HSL.
pub mod color;

/// Raw component input and its normalization.
pub mod component;

/// Shared range validation.
pub mod validate;

// ============================================================================
// Conversion
// ============================================================================

/// Pure conversions between representations.
pub mod convert;

/// Unified entry point over all representations.
pub mod speaker;

/// Parsing of `rgb(..)`, `hsl(..)` and hex text.
pub mod parse;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for color-speaker operations.
pub mod error;

pub use color::{CssHexColor, HslColor, HslInput, RgbColor, RgbInput};
pub use component::Component;
pub use error::{Error, Result, ValidationError, Violation, ViolationKind};
pub use speaker::{ColorSpeaker, Representation};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use color_speaker::prelude::*;
///
/// let hsl = HslColor::try_new(195, "100%", "50%").unwrap();
/// assert_eq!(ColorSpeaker::from(hsl).to_hex_code().as_str(), "#00BFFF");
/// ```
pub mod prelude {
    pub use crate::color::{CssHexColor, HslColor, RgbColor};
    pub use crate::component::Component;
    pub use crate::convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::speaker::{ColorSpeaker, Representation};
}
