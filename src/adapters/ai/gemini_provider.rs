//! Gemini Provider - Implementation of AIProvider for Google's Generative Language API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-3-flash-preview")
//!     .with_timeout(Duration::from_secs(60));
//!
//! let provider = GeminiProvider::new(config)?;
//! ```
//!
//! # Structured output
//!
//! A `ResponseFormat` is sent as `generationConfig.responseSchema` with
//! `responseMimeType = "application/json"`. Gemini speaks an OpenAPI subset:
//! type names are upper-case and `additionalProperties` is rejected, so the
//! standard JSON Schema is translated before sending.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::ports::{
    error_for_status, AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason,
    ProviderInfo, TokenUsage,
};

/// Default model, matching the one the landing page shipped with.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Default API root.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
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

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Converts our request to Gemini's format.
    fn to_gemini_request(&self, request: &CompletionRequest) -> GeminiRequest {
        let (response_mime_type, response_schema) = match &request.response_format {
            Some(format) => (
                Some("application/json".to_string()),
                Some(to_gemini_schema(&format.schema)),
            ),
            None => (None, None),
        };

        GeminiRequest {
            contents: vec![GeminiContent::new("user", &request.prompt)],
            generation_config: GenerationConfig {
                response_mime_type,
                response_schema,
            },
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let body = self.to_gemini_request(request);

        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            session_id = ?request.metadata.session_id,
            model = %self.config.model,
            structured = body.generation_config.response_schema.is_some(),
            "Sending Gemini generateContent request"
        );

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&body)
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

    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(30);
        let error_body = response.text().await.unwrap_or_default();

        Err(error_for_status(status.as_u16(), error_body, retry_after))
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
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

        parse_generate_response(&body, &self.config.model)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

/// Translates a standard JSON Schema node into Gemini's schema dialect.
fn to_gemini_schema(schema: &Value) -> Value {
    let Some(node) = schema.as_object() else {
        return schema.clone();
    };

    let mut out = Map::new();
    for (key, value) in node {
        match key.as_str() {
            "additionalProperties" => {}
            "type" => {
                let translated = value
                    .as_str()
                    .map(|t| Value::String(t.to_ascii_uppercase()))
                    .unwrap_or_else(|| value.clone());
                out.insert(key.clone(), translated);
            }
            "properties" => {
                let properties = value
                    .as_object()
                    .map(|props| {
                        props
                            .iter()
                            .map(|(name, prop)| (name.clone(), to_gemini_schema(prop)))
                            .collect::<Map<String, Value>>()
                    })
                    .unwrap_or_default();
                out.insert(key.clone(), Value::Object(properties));
            }
            "items" => {
                out.insert(key.clone(), to_gemini_schema(value));
            }
            _ => {
                out.insert(key.clone(), value.clone());
            }
        }
    }
    Value::Object(out)
}

/// Parses a generateContent response body.
fn parse_generate_response(body: &str, configured_model: &str) -> Result<CompletionResponse, AIError> {
    let response: GeminiResponse = serde_json::from_str(body)
        .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        return match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(AIError::content_filtered(reason)),
            None => Err(AIError::parse("No candidates in response")),
        };
    };

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("STOP") | None => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
            return Err(AIError::content_filtered(reason));
        }
        Some(_) => FinishReason::Other,
    };

    let content: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(AIError::parse("Empty response text"));
    }

    let usage = response
        .usage_metadata
        .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content,
        usage,
        model: response
            .model_version
            .unwrap_or_else(|| configured_model.to_string()),
        finish_reason,
    })
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    fn new(role: &str, text: &str) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![GeminiPart::text(text)],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl GeminiPart {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}
