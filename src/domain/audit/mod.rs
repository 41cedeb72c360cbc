//! Audit Module - Classification of an AI initiative as value or leakage.
//!
//! The diagnostic is produced by an external model through the `AIProvider`
//! port. This module only holds the shapes, the prompt, the response schema,
//! and the fallback returned when the model cannot be trusted.

mod diagnostic;
mod prompt;
mod request;

pub use diagnostic::{
    AuditCategory, AuditDiagnostic, AuditOutcome, DiagnosticSource, FALLBACK_REASONING,
    FALLBACK_RECOMMENDATION, FALLBACK_ROI_ESTIMATE,
};
pub use prompt::{
    build_prompt, response_schema, CATEGORY_FIELD, REASONING_FIELD, RECOMMENDATION_FIELD,
    REQUIRED_FIELDS, ROI_ESTIMATE_FIELD,
};
pub use request::AuditRequest;
