//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid AI timeout")]
    InvalidAiTimeout,

    #[error("AI timeout ({ai_secs}s) must be below the request timeout ({request_secs}s)")]
    AiTimeoutExceedsRequestTimeout { ai_secs: u64, request_secs: u64 },

    #[error("AI model override must not be blank")]
    EmptyModel,

    #[error("AI base URL override must be an http(s) URL")]
    InvalidBaseUrl,
}
