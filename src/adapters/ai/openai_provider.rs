//! OpenAI Provider - Implementation of AIProvider for OpenAI's Chat Completions API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-4o")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```
//!
//! # Structured output
//!
//! A `ResponseFormat` becomes `response_format = { type: "json_schema" }` in
//! strict mode. The schema is sent unchanged since OpenAI accepts standard
//! JSON Schema.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::ports::{
    error_for_status, AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason,
    ProviderInfo, TokenUsage,
};

/// Default model when OpenAI is selected.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o", "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new OpenAI provider with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to OpenAI's format.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: vec![OpenAIMessage {
                role: "user".to_string(),
                content: Some(request.prompt.clone()),
                refusal: None,
            }],
            response_format: request.response_format.as_ref().map(|format| {
                OpenAIResponseFormat {
                    format_type: "json_schema".to_string(),
                    json_schema: OpenAIJsonSchema {
                        name: format.name.clone(),
                        strict: true,
                        schema: format.schema.clone(),
                    },
                }
            }),
        }
    }

    /// Sends a request and handles the response.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let openai_request = self.to_openai_request(request);

        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            session_id = ?request.metadata.session_id,
            model = %self.config.model,
            structured = openai_request.response_format.is_some(),
            "Sending OpenAI chat completion request"
        );

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::timeout(self.config.timeout)
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        let retry_after = Self::parse_retry_after(&error_body);

        Err(error_for_status(status.as_u16(), error_body, retry_after))
    }

    /// Parses retry-after from error response.
    ///
    /// OpenAI sometimes says "try again in Xs"; defaults to 30 seconds.
    fn parse_retry_after(error_body: &str) -> u32 {
        const MARKER: &str = "try again in ";

        serde_json::from_str::<Value>(error_body)
            .ok()
            .and_then(|parsed| {
                let message = parsed.get("error")?.get("message")?.as_str()?.to_string();
                let idx = message.find(MARKER)?;
                let rest = &message[idx + MARKER.len()..];
                let end = rest
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(rest.len());
                rest[..end].parse::<u32>().ok()
            })
            .unwrap_or(30)
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        if self.config.api_key().trim().is_empty() {
            return Err(AIError::AuthenticationFailed);
        }

        let response = self.send_request(&request).await?;
        let response = self.handle_response_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| AIError::network(format!("Failed to read response: {}", e)))?;

        parse_chat_response(&body)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", &self.config.model)
    }
}

/// Parses a chat completions response body.
fn parse_chat_response(body: &str) -> Result<CompletionResponse, AIError> {
    let openai_response: OpenAIResponse = serde_json::from_str(body)
        .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

    let choice = openai_response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AIError::parse("No choices in response"))?;

    if let Some(refusal) = choice.message.refusal {
        return Err(AIError::content_filtered(refusal));
    }

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("stop") | None => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("content_filter") => return Err(AIError::content_filtered("content_filter")),
        Some(_) => FinishReason::Other,
    };

    let content = choice
        .message
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AIError::parse("Empty response text"))?;

    let usage = openai_response
        .usage
        .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content,
        usage,
        model: openai_response.model,
        finish_reason,
    })
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<OpenAIResponseFormat>,
}

#[derive(Debug, Serialize)]
struct OpenAIResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
    json_schema: OpenAIJsonSchema,
}

#[derive(Debug, Serialize)]
struct OpenAIJsonSchema {
    name: String,
    strict: bool,
    schema: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
