//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Machine-readable error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    IncompleteResponses,
    MissingFactor,
    InvalidValue,
    OutOfRange,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::IncompleteResponses => "INCOMPLETE_RESPONSES",
            ErrorCode::MissingFactor => "MISSING_FACTOR",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
        };
        write!(f, "{}", s)
    }
}
