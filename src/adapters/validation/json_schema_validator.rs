//! JSON Diagnostic Validator - Implementation of DiagnosticSchemaValidator.
//!
//! Walks the `required` and `properties` sections of the diagnostic schema
//! by hand. Only the subset the schema uses is supported: string-typed
//! properties with an optional `enum`.

use serde_json::{Map, Value};

use crate::domain::audit::response_schema;
use crate::ports::{DiagnosticSchemaValidator, SchemaValidationError};

/// Validator for model answers against the diagnostic response schema.
///
/// # Thread Safety
///
/// Holds only a `'static` reference to the schema, so it is `Send + Sync`
/// and can be shared across request handlers.
pub struct JsonDiagnosticValidator {
    schema: &'static Value,
}

impl Default for JsonDiagnosticValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonDiagnosticValidator {
    /// Create a validator for the audit diagnostic schema.
    pub fn new() -> Self {
        Self::with_schema(response_schema())
    }

    /// Create a validator for another schema of the same shape.
    pub fn with_schema(schema: &'static Value) -> Self {
        Self { schema }
    }

    fn required_fields(&self) -> Vec<&str> {
        self.schema
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    fn property(&self, field: &str) -> Option<&Value> {
        self.schema.get("properties").and_then(|p| p.get(field))
    }

    fn validate_field(
        &self,
        obj: &Map<String, Value>,
        field: &str,
    ) -> Result<(), SchemaValidationError> {
        let value = obj
            .get(field)
            .ok_or_else(|| SchemaValidationError::MissingRequired {
                field: field.to_string(),
            })?;

        let text = value
            .as_str()
            .ok_or_else(|| SchemaValidationError::InvalidType {
                field: field.to_string(),
                expected: "string".to_string(),
                actual: Self::type_name(value),
            })?;

        if let Some(allowed) = self
            .property(field)
            .and_then(|p| p.get("enum"))
            .and_then(Value::as_array)
        {
            let allowed: Vec<&str> = allowed.iter().filter_map(Value::as_str).collect();
            if !allowed.contains(&text) {
                return Err(SchemaValidationError::InvalidEnumValue {
                    field: field.to_string(),
                    value: text.to_string(),
                    allowed: allowed.iter().map(|s| s.to_string()).collect(),
                });
            }
        }

        Ok(())
    }

    fn type_name(value: &Value) -> String {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string()
    }

    fn collect_errors(mut errors: Vec<SchemaValidationError>) -> SchemaValidationError {
        if errors.len() == 1 {
            if let Some(only) = errors.pop() {
                return only;
            }
        }
        SchemaValidationError::Multiple(errors)
    }
}

impl DiagnosticSchemaValidator for JsonDiagnosticValidator {
    fn validate(&self, output: &Value) -> Result<(), SchemaValidationError> {
        let obj = output
            .as_object()
            .ok_or_else(|| SchemaValidationError::InvalidType {
                field: "root".to_string(),
                expected: "object".to_string(),
                actual: Self::type_name(output),
            })?;

        let errors: Vec<SchemaValidationError> = self
            .required_fields()
            .into_iter()
            .filter_map(|field| self.validate_field(obj, field).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self::collect_errors(errors))
        }
    }

    fn schema(&self) -> &Value {
        self.schema
    }
}
