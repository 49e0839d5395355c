//! Language model backends.
//!
//! Each backend sends one prompt and returns the raw generated text. Parsing
//! that text into a roadmap happens in [`crate::extract`].

pub mod gemini;
pub mod openai;

use std::time::Duration;

use async_trait::async_trait;
use compass_config::{LlmConfig, LlmProviderKind};

use crate::error::LlmError;

pub use gemini::GeminiProvider;
pub use openai::OpenAiCompatibleProvider;

/// Sampling temperature sent to every backend.
pub const TEMPERATURE: f32 = 0.7;

/// Output token ceiling sent to every backend.
pub const MAX_TOKENS: u32 = 3000;

const USER_AGENT: &str = concat!("compass/", env!("CARGO_PKG_VERSION"));

/// A text-completion backend.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short backend name for logs and health output.
    fn name(&self) -> &'static str;

    /// Send `prompt` and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Build the backend selected by `config`.
///
/// Returns `Ok(None)` when the mock backend is selected or no usable API key
/// is present.
///
/// # Errors
///
/// Returns [`LlmError::Config`] when a backend is selected but misconfigured,
/// and [`LlmError::Http`] when the HTTP client cannot be built.
pub fn provider_from_config(config: &LlmConfig) -> Result<Option<Box<dyn LlmProvider>>, LlmError> {
    if !config.is_configured() {
        return Ok(None);
    }
    config.validate()?;

    let http = http_client(Duration::from_secs(config.timeout_secs))?;
    let provider: Box<dyn LlmProvider> = match config.kind() {
        LlmProviderKind::Mock => return Ok(None),
        LlmProviderKind::Gemini => Box::new(GeminiProvider::new(http, config)),
        LlmProviderKind::OpenAiCompatible => Box::new(OpenAiCompatibleProvider::new(http, config)),
    };
    Ok(Some(provider))
}

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, LlmError> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}
