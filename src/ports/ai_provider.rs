//! AI Provider Port - Interface for LLM provider integrations.
//!
//! This port abstracts the single structured completion the auditor needs,
//! so the application layer never couples to a specific vendor API.
//!
//! # Design
//!
//! - One non-streaming completion per call, no retries
//! - A single user prompt; the auditor needs no conversation history
//! - Optional JSON response schema that adapters translate into their own
//!   structured-output dialect
//! - Error types for common failure modes (rate limits, auth, parse, etc.)
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedProvider;
//!
//! #[async_trait]
//! impl AIProvider for FixedProvider {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
//!         Ok(CompletionResponse {
//!             content: "{}".to_string(),
//!             usage: TokenUsage::default(),
//!             model: "fixed".to_string(),
//!             finish_reason: FinishReason::Stop,
//!         })
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("fixed", "fixed")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::domain::foundation::{SessionId, TraceId};

/// Port for AI/LLM provider interactions.
///
/// Implementations connect to external AI services (Gemini, OpenAI)
/// and translate between the provider-specific API and our domain types.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Name and model, for logs.
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for AI completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Instruction text sent as the user turn.
    pub prompt: String,
    /// Structured output the model must produce.
    pub response_format: Option<ResponseFormat>,
    /// Request metadata for tracing.
    pub metadata: RequestMetadata,
}

impl CompletionRequest {
    /// Creates a new completion request for `prompt`.
    pub fn new(metadata: RequestMetadata, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_format: None,
            metadata,
        }
    }

    /// Requires the answer to be JSON matching `format`.
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// JSON structured-output requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseFormat {
    /// Schema name, used by providers that require one.
    pub name: String,
    /// Standard JSON Schema for the answer.
    pub schema: Value,
}

impl ResponseFormat {
    pub fn json_schema(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// Request metadata for tracing.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// Browser session that triggered the call, when known.
    pub session_id: Option<SessionId>,
    /// Trace ID for log correlation.
    pub trace_id: TraceId,
}

impl RequestMetadata {
    /// Creates new request metadata with a fresh trace id.
    pub fn new(session_id: Option<SessionId>) -> Self {
        Self {
            session_id,
            trace_id: TraceId::new(),
        }
    }
}

/// Response from AI completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated content.
    pub content: String,
    /// Token usage reported by the provider.
    pub usage: TokenUsage,
    /// Model version that answered, as reported by the provider.
    pub model: String,
    /// Why the model stopped generating.
    pub finish_reason: FinishReason,
}

/// Token counts reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    /// Saturates at `u32::MAX`.
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Output was cut off at the token limit; the JSON is incomplete.
    Length,
    /// Any other provider-specific reason.
    Other,
}

/// Provider name and configured model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    /// Provider name (e.g., "gemini", "openai").
    pub name: String,
    /// Model identifier (e.g., "gemini-3-flash-preview", "gpt-4o").
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// AI provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AIError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Content was filtered for safety.
    #[error("content filtered: {reason}")]
    ContentFiltered {
        /// Reason for filtering.
        reason: String,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key missing, invalid, or rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl AIError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates a content filtered error.
    pub fn content_filtered(reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            reason: reason.into(),
        }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a timeout error for the configured client timeout.
    pub fn timeout(timeout: Duration) -> Self {
        Self::Timeout {
            timeout_secs: u32::try_from(timeout.as_secs()).unwrap_or(u32::MAX),
        }
    }

    /// Returns true if a later identical call could succeed.
    ///
    /// Only used to classify log output; callers never retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AIError::RateLimited { .. }
                | AIError::Unavailable { .. }
                | AIError::Network(_)
                | AIError::Timeout { .. }
        )
    }
}

/// Maps a non-success HTTP status and body to an `AIError`.
///
/// Shared by the HTTP-based adapters so every vendor reports failures the
/// same way.
pub fn error_for_status(status: u16, body: String, retry_after_secs: u32) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(retry_after_secs),
        400 => AIError::InvalidRequest(body),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}
