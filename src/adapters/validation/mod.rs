//! Validation Adapters - Schema validation implementations.
//!
//! Contains the adapter that checks model answers against the diagnostic
//! response schema before they are trusted.

mod json_schema_validator;

pub use json_schema_validator::JsonDiagnosticValidator;
