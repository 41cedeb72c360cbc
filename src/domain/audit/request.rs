//! Audit request value object.

use std::fmt;

use crate::domain::foundation::ValidationError;

/// Free-text description of the initiative to audit.
///
/// Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest(String);

impl AuditRequest {
    /// Creates a request, rejecting empty or whitespace-only text.
    pub fn new(use_case: impl Into<String>) -> Result<Self, ValidationError> {
        let use_case = use_case.into();
        let trimmed = use_case.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("use_case"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the use case text.
    pub fn use_case(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuditRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
