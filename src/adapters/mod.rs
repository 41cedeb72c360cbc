//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Hosted model providers (Gemini, OpenAI) and a mock
//! - `http` - REST API (axum)
//! - `validation` - JSON schema checks for model answers

pub mod ai;
pub mod http;
pub mod validation;

pub use ai::{GeminiProvider, MockAIProvider, OpenAIProvider};
pub use http::{app_router, AuditAppState};
pub use validation::JsonDiagnosticValidator;
