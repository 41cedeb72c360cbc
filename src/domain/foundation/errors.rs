//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_field_name() {
        let err = ValidationError::empty_field("use_case");
        assert_eq!(err.to_string(), "Field 'use_case' cannot be empty");
        assert_eq!(err.field(), "use_case");
    }

    #[test]
    fn invalid_format_displays_reason() {
        let err = ValidationError::invalid_format("session_id", "not a uuid");
        assert_eq!(
            err.to_string(),
            "Field 'session_id' has invalid format: not a uuid"
        );
        assert_eq!(err.field(), "session_id");
    }
}
