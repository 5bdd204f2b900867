//! CSS hexadecimal color codes (`#RGB` / `#RRGGBB`).

use std::fmt;

use crate::error::{HexFormatError, ValidationError};

/// A validated CSS hex color code, stored uppercase.
///
/// The digit count supplied by the caller is preserved, so `#808` displays as
/// `#808`. Use [`CssHexColor::expanded`] for the six-digit form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct CssHexColor {
    hex: String,
}

impl CssHexColor {
    /// Digit count of the shorthand form.
    pub const SHORT_DIGITS: usize = 3;
    /// Digit count of the full form.
    pub const LONG_DIGITS: usize = 6;

    /// Parse and validate a hex color code. Input is case-insensitive.
    pub fn new(hex: &str) -> Result<Self, ValidationError> {
        let hex = hex.to_ascii_uppercase();
        check_format(&hex).map_err(ValidationError::from)?;
        Ok(Self { hex })
    }

    /// Wraps a code produced by this crate's own formatting.
    pub(crate) fn from_canonical(hex: String) -> Self {
        debug_assert!(check_format(&hex).is_ok(), "malformed canonical hex {hex}");
        Self { hex }
    }

    /// Whether `hex` is a valid CSS hex color code.
    pub fn is_valid_css_hex(hex: &str) -> bool {
        check_format(&hex.to_ascii_uppercase()).is_ok()
    }

    /// Asserts that `hex` is a valid CSS hex color code.
    pub fn assert_valid_css_hex(hex: &str) -> Result<(), ValidationError> {
        check_format(&hex.to_ascii_uppercase()).map_err(ValidationError::from)
    }

    /// The code, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Number of hex digits, either 3 or 6.
    pub fn digits(&self) -> usize {
        self.hex.len() - 1
    }

    /// Whether this is a three-digit shorthand code.
    pub fn is_shorthand(&self) -> bool {
        self.digits() == Self::SHORT_DIGITS
    }

    /// The six-digit form: `#ABC` becomes `#AABBCC`.
    #[must_use]
    pub fn expanded(&self) -> Self {
        if !self.is_shorthand() {
            return self.clone();
        }

        let mut hex = String::with_capacity(Self::LONG_DIGITS + 1);
        hex.push('#');
        for c in self.hex.chars().skip(1) {
            hex.push(c);
            hex.push(c);
        }
        Self { hex }
    }

    /// The three channel bytes encoded by this code, shorthand expanded first.
    pub(crate) fn channel_bytes(&self) -> [u8; 3] {
        let expanded = self.expanded();
        let digits = &expanded.hex.as_bytes()[1..];
        [
            byte(digits[0], digits[1]),
            byte(digits[2], digits[3]),
            byte(digits[4], digits[5]),
        ]
    }
}

/// Validation order: leading `#`, digit count, then digit alphabet.
fn check_format(hex: &str) -> Result<(), HexFormatError> {
    let Some(digits) = hex.strip_prefix('#') else {
        return Err(HexFormatError::MissingHash);
    };

    let count = digits.chars().count();
    if count != CssHexColor::SHORT_DIGITS && count != CssHexColor::LONG_DIGITS {
        return Err(HexFormatError::DigitCount {
            digits: count,
            hex: hex.to_owned(),
        });
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(HexFormatError::InvalidDigits(hex.to_owned()));
    }

    Ok(())
}

const fn nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'A'..=b'F' => b - b'A' + 10,
        b'a'..=b'f' => b - b'a' + 10,
        _ => 0,
    }
}

const fn byte(hi: u8, lo: u8) -> u8 {
    (nibble(hi) << 4) | nibble(lo)
}

impl fmt::Display for CssHexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl AsRef<str> for CssHexColor {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}

impl From<CssHexColor> for String {
    fn from(color: CssHexColor) -> Self {
        color.hex
    }
}

impl TryFrom<String> for CssHexColor {
    type Error = ValidationError;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Self::new(&hex)
    }
}

impl TryFrom<&str> for CssHexColor {
    type Error = ValidationError;

    fn try_from(hex: &str) -> Result<Self, Self::Error> {
        Self::new(hex)
    }
}
