//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured responses
//! - Simulated delays for in-flight and timeout testing
//! - Error injection for fallback testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_json_response(json!({"category": "VALUE", ...}))
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Mock AI provider for testing.
///
/// Configurable to return specific responses, simulate delays, or inject errors.
/// Clones share their queue and call history.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success {
        content: String,
        usage: TokenUsage,
        finish_reason: FinishReason,
    },
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate content filtering.
    ContentFiltered { reason: String },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate an unparseable provider envelope.
    Parse { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Parse { message } => AIError::parse(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Locks a mutex, recovering the data if a panicking test poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.with_response_full(content, TokenUsage::new(10, 20), FinishReason::Stop)
    }

    /// Adds a successful response whose text is the given JSON value.
    pub fn with_json_response(self, value: Value) -> Self {
        self.with_response(value.to_string())
    }

    /// Adds a successful response with full configuration.
    pub fn with_response_full(
        self,
        content: impl Into<String>,
        usage: TokenUsage,
        finish_reason: FinishReason,
    ) -> Self {
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            usage,
            finish_reason,
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the provider info.
    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
                usage: TokenUsage::new(5, 10),
                finish_reason: FinishReason::Stop,
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success {
                content,
                usage,
                finish_reason,
            } => Ok(CompletionResponse {
                content,
                usage,
                model: self.info.model.clone(),
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RequestMetadata;
    use serde_json::json;

    fn test_request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(None), "Hello")
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_response() {
        let provider = MockAIProvider::new().with_response("Hello from mock!");

        let response = provider.complete(test_request()).await.unwrap();

        assert_eq!(response.content, "Hello from mock!");
        assert_eq!(response.model, "mock-model-1");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[tokio::test]
    async fn mock_provider_serializes_json_responses() {
        let provider = MockAIProvider::new().with_json_response(json!({"category": "VALUE"}));

        let response = provider.complete(test_request()).await.unwrap();
        let value: Value = serde_json::from_str(&response.content).unwrap();

        assert_eq!(value, json!({"category": "VALUE"}));
    }

    #[tokio::test]
    async fn mock_provider_returns_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("First")
            .with_response("Second");

        let r1 = provider.complete(test_request()).await.unwrap();
        let r2 = provider.complete(test_request()).await.unwrap();
        let r3 = provider.complete(test_request()).await.unwrap();

        assert_eq!(r1.content, "First");
        assert_eq!(r2.content, "Second");
        assert_eq!(r3.content, "Mock response");
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_error() {
        let provider =
            MockAIProvider::new().with_error(MockError::RateLimited { retry_after_secs: 30 });

        let err = provider.complete(test_request()).await.unwrap_err();

        assert!(err.is_retryable());
        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn mock_provider_tracks_calls_across_clones() {
        let provider = MockAIProvider::new();
        let clone = provider.clone();

        assert_eq!(provider.call_count(), 0);
        clone.complete(test_request()).await.unwrap();
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.get_calls()[0].prompt, "Hello");

        provider.clear_calls();
        assert_eq!(clone.call_count(), 0);
    }

    #[tokio::test]
    async fn mock_provider_respects_delay() {
        let provider = MockAIProvider::new()
            .with_response("Delayed response")
            .with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        provider.complete(test_request()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn mock_provider_returns_info() {
        let provider = MockAIProvider::new()
            .with_provider_info(ProviderInfo::new("custom", "custom-model"));

        let info = provider.provider_info();
        assert_eq!(info.name, "custom");
        assert_eq!(info.model, "custom-model");
    }

    #[test]
    fn mock_error_converts_to_ai_error() {
        let err: AIError = MockError::AuthenticationFailed.into();
        assert!(matches!(err, AIError::AuthenticationFailed));

        let err: AIError = MockError::Timeout { timeout_secs: 30 }.into();
        assert!(matches!(err, AIError::Timeout { timeout_secs: 30 }));

        let err: AIError = MockError::Parse {
            message: "bad envelope".to_string(),
        }
        .into();
        assert!(matches!(err, AIError::Parse(_)));
    }
}
