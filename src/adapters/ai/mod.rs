//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for various LLM providers.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models (default)
//! - `OpenAIProvider` - OpenAI GPT models
//! - `MockAIProvider` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;
mod openai_provider;

pub use gemini_provider::{
    GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, DEFAULT_OPENAI_MODEL};
