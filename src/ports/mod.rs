//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Structured completions from a hosted model
//! - `DiagnosticSchemaValidator` - Trust check for model answers

mod ai_provider;
mod schema_validator;

pub use ai_provider::{
    error_for_status, AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason,
    ProviderInfo, RequestMetadata, ResponseFormat, TokenUsage,
};
pub use schema_validator::{DiagnosticSchemaValidator, SchemaValidationError};
