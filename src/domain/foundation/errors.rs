//! Error types shared across the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: String,
    },
}

impl ValidationError {
    /// Creates an out of range validation error.
    ///
    /// `actual` is the input as given, which may be negative, fractional or
    /// wider than the field.
    pub fn out_of_range(
        field: impl Into<String>,
        min: i32,
        max: i32,
        actual: impl ToString,
    ) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual: actual.to_string(),
        }
    }

    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }
}

/// Error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    OutOfRange,

    // Wiring errors
    InvalidCriterion,

    // Export errors
    UnsupportedFormat,

    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidCriterion => "INVALID_CRITERION",
            ErrorCode::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("score", 0, 2, 7);
        assert_eq!(
            format!("{}", err),
            "Field 'score' must be between 0 and 2, got 7"
        );
    }

    #[test]
    fn validation_error_out_of_range_keeps_non_integer_input() {
        let err = ValidationError::out_of_range("score", 0, 2, "1.5");
        assert_eq!(
            format!("{}", err),
            "Field 'score' must be between 0 and 2, got 1.5"
        );
    }

    #[test]
    fn validation_error_maps_to_code() {
        assert_eq!(
            ValidationError::out_of_range("score", 0, 2, 3).code(),
            ErrorCode::OutOfRange
        );
        assert_eq!(
            ValidationError::out_of_range("score", 0, 2, -1).code(),
            ErrorCode::OutOfRange
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidCriterion), "INVALID_CRITERION");
        assert_eq!(format!("{}", ErrorCode::UnsupportedFormat), "UNSUPPORTED_FORMAT");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
