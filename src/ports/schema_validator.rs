//! Schema Validator Port - Model answer validation interface.
//!
//! The auditor never trusts a model answer before it passes this check.
//! Adapters (like `JsonDiagnosticValidator`) provide the implementation.

use serde_json::Value;
use thiserror::Error;

/// Port for validating a parsed model answer against the diagnostic schema.
///
/// # Contract
///
/// Implementations must:
/// - Require a JSON object at the root
/// - Require every schema field to be present and a string
/// - Reject enum-constrained fields whose value is outside the enum
/// - Expose the schema they validate against
pub trait DiagnosticSchemaValidator: Send + Sync {
    /// Validate a parsed answer.
    ///
    /// Returns `Ok(())` if valid, `Err` with validation errors if not.
    fn validate(&self, output: &Value) -> Result<(), SchemaValidationError>;

    /// Get the JSON Schema this validator enforces.
    fn schema(&self) -> &Value;
}

/// Errors that can occur during schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaValidationError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid type for field {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid value for field {field}: {value} is not one of {allowed:?}")]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Validation errors: {0:?}")]
    Multiple(Vec<SchemaValidationError>),
}

impl SchemaValidationError {
    /// Returns true if this error contains multiple validation failures.
    pub fn is_multiple(&self) -> bool {
        matches!(self, SchemaValidationError::Multiple(_))
    }

    /// Returns the number of individual failures.
    pub fn error_count(&self) -> usize {
        match self {
            SchemaValidationError::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field() {
        let err = SchemaValidationError::MissingRequired {
            field: "roiEstimate".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required field: roiEstimate");
    }

    #[test]
    fn multiple_counts_errors() {
        let err = SchemaValidationError::Multiple(vec![
            SchemaValidationError::MissingRequired {
                field: "reasoning".to_string(),
            },
            SchemaValidationError::MissingRequired {
                field: "recommendation".to_string(),
            },
        ]);
        assert!(err.is_multiple());
        assert_eq!(err.error_count(), 2);

        let single = SchemaValidationError::MissingRequired {
            field: "category".to_string(),
        };
        assert!(!single.is_multiple());
        assert_eq!(single.error_count(), 1);
    }
}
