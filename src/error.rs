//! Error types for color-speaker operations.
//!
//! Every value object validates itself eagerly. A failed construction yields a
//! [`ValidationError`] carrying an aggregate message plus one [`Violation`] per
//! offending field, so callers can report every problem at once.

use std::fmt;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in color-speaker operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A color value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Text could not be recognized as any supported color notation.
    #[error("Unrecognized color syntax: {0}")]
    Syntax(String),
}

/// Broad classification of a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A numeric field outside its legal bound.
    Range,
    /// A field supplied with the wrong kind of value.
    Type,
    /// A malformed textual encoding.
    Format,
}

/// Malformed CSS hexadecimal color code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexFormatError {
    /// Input is empty or does not start with `#`.
    #[error("Hex colors must begin with '#'.")]
    MissingHash,

    /// Wrong number of digits after the `#`.
    #[error("Hex color codes must be 3 or 6 digits, not {digits} ({hex})")]
    DigitCount {
        /// Number of characters following the `#`.
        digits: usize,
        /// The (uppercased) offending input.
        hex: String,
    },

    /// At least one digit is not in `[0-9A-F]`.
    #[error("'{0}' is not a valid CSS hexadecimal color code.")]
    InvalidDigits(String),
}

/// A single reason why a field was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// Value is smaller than the lower bound.
    #[error("Must be greater than or equal to {min}, not {value}")]
    BelowMinimum {
        /// Inclusive lower bound.
        min: i64,
        /// Offending value.
        value: i64,
    },

    /// Value is larger than the upper bound.
    #[error("Must be lesser than or equal to {max}, not {value}")]
    AboveMaximum {
        /// Inclusive upper bound.
        max: i64,
        /// Offending value.
        value: i64,
    },

    /// Value lies outside `min..=max`, reported as a single interval.
    #[error("Must be between {min} and {max}, not {value}")]
    OutOfRange {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
        /// Offending value.
        value: i64,
    },

    /// An integer was required.
    #[error("'{0}' is not a valid integer")]
    NotAnInteger(String),

    /// A percentage (number or `"NN%"` text) was required.
    #[error("'{0}' is not a valid percentage")]
    NotAPercentage(String),

    /// Malformed hex color code.
    #[error(transparent)]
    Format(#[from] HexFormatError),
}

impl Violation {
    /// Classifies this violation.
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::BelowMinimum { .. } | Self::AboveMaximum { .. } | Self::OutOfRange { .. } => {
                ViolationKind::Range
            }
            Self::NotAnInteger(_) | Self::NotAPercentage(_) => ViolationKind::Type,
            Self::Format(_) => ViolationKind::Format,
        }
    }
}

/// A [`Violation`] tagged with the name of the field it concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    /// Field name, e.g. `"red"` or `"lightness"`.
    pub field: &'static str,
    /// What was wrong with it.
    pub violation: Violation,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.violation)
    }
}

/// Construction of a color value object failed.
///
/// Reasons are kept in field declaration order.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    reasons: Vec<FieldViolation>,
}

impl ValidationError {
    /// Creates an error from an aggregate message and its per-field reasons.
    pub fn new(message: impl Into<String>, reasons: Vec<FieldViolation>) -> Self {
        Self {
            message: message.into(),
            reasons,
        }
    }

    /// Aggregate, human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every per-field reason, in field order.
    pub fn reasons(&self) -> &[FieldViolation] {
        &self.reasons
    }

    /// Reason recorded for `field`, if any.
    pub fn reason(&self, field: &str) -> Option<&Violation> {
        self.reasons
            .iter()
            .find(|r| r.field == field)
            .map(|r| &r.violation)
    }

    /// Names of the rejected fields, in field order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.reasons.iter().map(|r| r.field)
    }
}

impl From<HexFormatError> for ValidationError {
    fn from(err: HexFormatError) -> Self {
        Self::new(
            err.to_string(),
            vec![FieldViolation {
                field: "hex",
                violation: Violation::Format(err),
            }],
        )
    }
}
