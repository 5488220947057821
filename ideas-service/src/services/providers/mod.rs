//! Text-generation provider abstractions and implementations.
//!
//! Each provider turns a prompt into the model's raw reply text. Ordering,
//! fallback and parsing live in the generator, not here.

pub mod anthropic;
pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use anthropic::AnthropicProvider;
pub use mock::MockTextProvider;
pub use openai::OpenAiProvider;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A chat-style text-generation backend.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Short stable name used in logs and metric labels.
    fn name(&self) -> &'static str;

    /// Send `prompt` as a single user message and return the reply text.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Reads a non-success response into a [`ProviderError::Api`].
pub(crate) async fn api_error(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ProviderError::Api { status, body }
}
