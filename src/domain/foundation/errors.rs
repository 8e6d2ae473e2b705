//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur when engine inputs fail validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Weights must sum to 100, got {actual}")]
    WeightSumMismatch { actual: i32 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a non-finite number validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(
        field: impl Into<String>,
        min: impl Into<f64>,
        max: impl Into<f64>,
        actual: impl Into<f64>,
    ) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min: min.into(),
            max: max.into(),
            actual: actual.into(),
        }
    }

    /// Creates a weight sum mismatch error.
    pub fn weight_sum(actual: i32) -> Self {
        ValidationError::WeightSumMismatch { actual }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending field name, if the error names one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::NotFinite { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => Some(field),
            ValidationError::WeightSumMismatch { .. } => None,
        }
    }
}

/// Checks that a numeric input is finite, naming the field on failure.
pub fn ensure_finite(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::not_finite(field))
    }
}

/// Error codes surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A numeric parameter is malformed or outside its accepted range.
    InvalidParameter,
    /// A weight vector does not satisfy its sum invariant.
    InvalidWeights,
    /// A structured record could not be decoded.
    MalformedInput,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::InvalidWeights => "INVALID_WEIGHTS",
            ErrorCode::MalformedInput => "MALFORMED_INPUT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an invalid parameter error for a specific field.
    pub fn invalid_parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParameter, message).with_detail("field", field.into())
    }

    /// Creates a malformed input error from a decoding failure.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedInput, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::WeightSumMismatch { .. } => ErrorCode::InvalidWeights,
            _ => ErrorCode::InvalidParameter,
        };
        let field = err.field().map(str::to_string);
        let domain = DomainError::new(code, err.to_string());
        match field {
            Some(field) => domain.with_detail("field", field),
            None => domain,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_not_finite_displays_correctly() {
        let err = ValidationError::not_finite("capacity");
        assert_eq!(format!("{}", err), "Field 'capacity' must be a finite number");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("weight", 0, 100, 150);
        assert_eq!(
            format!("{}", err),
            "Field 'weight' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_weight_sum_displays_correctly() {
        let err = ValidationError::weight_sum(97);
        assert_eq!(format!("{}", err), "Weights must sum to 100, got 97");
    }

    #[test]
    fn ensure_finite_rejects_nan_and_infinity() {
        assert!(ensure_finite("x", 1.5).is_ok());
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::InvalidParameter, "Lifetime too long");
        assert_eq!(format!("{}", err), "[INVALID_PARAMETER] Lifetime too long");
    }

    #[test]
    fn validation_error_converts_to_invalid_parameter_with_field() {
        let err: DomainError = ValidationError::not_finite("energy_price").into();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
        assert_eq!(err.details.get("field"), Some(&"energy_price".to_string()));
    }

    #[test]
    fn weight_sum_mismatch_converts_to_invalid_weights() {
        let err: DomainError = ValidationError::weight_sum(101).into();
        assert_eq!(err.code, ErrorCode::InvalidWeights);
        assert!(err.details.is_empty());
    }

    #[test]
    fn json_error_converts_to_malformed_input() {
        let parse = serde_json::from_str::<u32>("\"not a number\"").unwrap_err();
        let err: DomainError = parse.into();
        assert_eq!(err.code, ErrorCode::MalformedInput);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidWeights), "INVALID_WEIGHTS");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
