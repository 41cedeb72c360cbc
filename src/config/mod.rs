//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ROI_AUDIT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use roi_audit::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load_validated()?;
//!
//! println!("Server running on {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod ai;
mod error;
mod server;

pub use ai::{AiConfig, AiProviderKind};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "ROI_AUDIT";

/// Unprefixed key variable honored for the Gemini provider.
pub const LEGACY_API_KEY_VAR: &str = "API_KEY";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Gemini/OpenAI)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds `ai.gemini_api_key` from a bare `API_KEY` variable
    /// 3. Reads environment variables with `ROI_AUDIT` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ROI_AUDIT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ROI_AUDIT__AI__PROVIDER=openai` -> `ai.provider = openai`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(key) = std::env::var(LEGACY_API_KEY_VAR) {
            builder = builder.set_default("ai.gemini_api_key", key)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` for unparseable values and
    /// `ConfigError::ValidationFailed` for values out of range.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;

        if self.ai.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::AiTimeoutExceedsRequestTimeout {
                ai_secs: self.ai.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "API_KEY",
        "ROI_AUDIT__AI__GEMINI_API_KEY",
        "ROI_AUDIT__AI__PROVIDER",
        "ROI_AUDIT__AI__TIMEOUT_SECS",
        "ROI_AUDIT__SERVER__PORT",
        "ROI_AUDIT__SERVER__ENVIRONMENT",
    ];

    /// Helper to clear environment variables before and after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_loads_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ai.provider, AiProviderKind::Gemini);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("ROI_AUDIT__SERVER__PORT", "3000")]).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("ROI_AUDIT__SERVER__ENVIRONMENT", "production")]).unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_selects_openai_provider() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("ROI_AUDIT__AI__PROVIDER", "openai")]).unwrap();
        assert_eq!(config.ai.provider, AiProviderKind::OpenAI);
    }

    #[test]
    fn test_bare_api_key_seeds_gemini_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("API_KEY", "legacy-key")]).unwrap();
        assert_eq!(config.ai.api_key(), Some("legacy-key"));
    }

    #[test]
    fn test_prefixed_key_wins_over_bare_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("API_KEY", "legacy-key"),
            ("ROI_AUDIT__AI__GEMINI_API_KEY", "prefixed-key"),
        ])
        .unwrap();
        assert_eq!(config.ai.api_key(), Some("prefixed-key"));
    }

    #[test]
    fn test_rejects_ai_timeout_longer_than_request_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("ROI_AUDIT__AI__TIMEOUT_SECS", "120")]).unwrap();

        assert_eq!(
            config.validate(),
            Err(ValidationError::AiTimeoutExceedsRequestTimeout {
                ai_secs: 120,
                request_secs: 90,
            })
        );
    }

    #[test]
    fn test_load_validated_reports_validation_failure() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ROI_AUDIT__SERVER__PORT", "0");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidPort))
        ));
    }

    #[test]
    fn test_load_validated_accepts_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load_validated();
        clear_env();

        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_port_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        assert!(matches!(
            load_with(&[("ROI_AUDIT__SERVER__PORT", "not-a-port")]),
            Err(ConfigError::LoadError(_))
        ));
    }
}
