//! Shared range validation for the color value objects.
//!
//! Each value object's constructor calls [`check_range`] (or one of its
//! siblings) per field and funnels the results through a [`Violations`]
//! collector, which reports every failing field together.

use crate::error::{FieldViolation, ValidationError, Violation};

/// Checks `min <= value <= max`, naming the violated side.
pub fn check_range(field: &'static str, min: i64, max: i64, value: i64) -> Option<FieldViolation> {
    let violation = if value < min {
        Violation::BelowMinimum { min, value }
    } else if value > max {
        Violation::AboveMaximum { max, value }
    } else {
        return None;
    };

    Some(FieldViolation { field, violation })
}

/// Checks `min <= value <= max`, reporting the whole interval on failure.
pub fn check_interval(
    field: &'static str,
    min: i64,
    max: i64,
    value: i64,
) -> Option<FieldViolation> {
    if (min..=max).contains(&value) {
        return None;
    }

    Some(FieldViolation {
        field,
        violation: Violation::OutOfRange { min, max, value },
    })
}

/// Accumulates per-field violations for a single construction attempt.
#[derive(Debug, Default)]
pub struct Violations {
    reasons: Vec<FieldViolation>,
}

impl Violations {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation against `field`.
    pub fn push(&mut self, field: &'static str, violation: Violation) {
        self.reasons.push(FieldViolation { field, violation });
    }

    /// Records the outcome of a range check, if it failed.
    pub fn record(&mut self, outcome: Option<FieldViolation>) {
        if let Some(reason) = outcome {
            self.reasons.push(reason);
        }
    }

    /// Unwraps a normalization result, recording its violation on failure.
    pub fn take<T>(&mut self, field: &'static str, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.push(field, violation);
                None
            }
        }
    }

    /// Converts the batch into a [`ValidationError`] carrying `message` and
    /// every recorded reason, in recording order.
    pub fn into_error(self, message: &str) -> ValidationError {
        tracing::debug!(
            violations = self.reasons.len(),
            summary = message,
            "rejected color value"
        );
        ValidationError::new(message, self.reasons)
    }
}
