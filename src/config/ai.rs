//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::ai::{GeminiConfig, GeminiProvider, OpenAIConfig, OpenAIProvider};
use crate::ports::{AIError, AIProvider};

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which hosted model answers audits
    #[serde(default)]
    pub provider: AiProviderKind,

    /// Gemini API key
    pub gemini_api_key: Option<Secret<String>>,

    /// OpenAI API key
    pub openai_api_key: Option<Secret<String>>,

    /// Model override; each provider has its own default
    pub model: Option<String>,

    /// API root override
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderKind {
    #[default]
    Gemini,
    OpenAI,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key for the selected provider, if one is set and non-blank
    pub fn api_key(&self) -> Option<&str> {
        let key = match self.provider {
            AiProviderKind::Gemini => self.gemini_api_key.as_ref(),
            AiProviderKind::OpenAI => self.openai_api_key.as_ref(),
        }?;
        let key = key.expose_secret().trim();
        (!key.is_empty()).then_some(key)
    }

    /// Check if the selected provider has a key
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// Build the selected provider
    ///
    /// A missing key still yields a provider. Every audit it serves fails
    /// authentication and returns the fallback diagnostic.
    pub fn build_provider(&self) -> Result<Arc<dyn AIProvider>, AIError> {
        let key = self.api_key().unwrap_or_default();

        let provider: Arc<dyn AIProvider> = match self.provider {
            AiProviderKind::Gemini => {
                let mut config = GeminiConfig::new(key).with_timeout(self.timeout());
                if let Some(model) = &self.model {
                    config = config.with_model(model.trim());
                }
                if let Some(url) = &self.base_url {
                    config = config.with_base_url(url.trim_end_matches('/'));
                }
                Arc::new(GeminiProvider::new(config)?)
            }
            AiProviderKind::OpenAI => {
                let mut config = OpenAIConfig::new(key).with_timeout(self.timeout());
                if let Some(model) = &self.model {
                    config = config.with_model(model.trim());
                }
                if let Some(url) = &self.base_url {
                    config = config.with_base_url(url.trim_end_matches('/'));
                }
                Arc::new(OpenAIProvider::new(config)?)
            }
        };

        Ok(provider)
    }

    /// Validate AI configuration
    ///
    /// A missing API key is not an error here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if self.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            return Err(ValidationError::EmptyModel);
        }
        if let Some(url) = &self.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ValidationError::InvalidBaseUrl);
            }
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProviderKind::default(),
            gemini_api_key: None,
            openai_api_key: None,
            model: None,
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}
