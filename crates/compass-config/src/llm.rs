//! Language model provider configuration.
//!
//! Read from the bare `LLM_PROVIDER`, `LLM_API_KEY`, `LLM_API_URL`, `LLM_MODEL`
//! and `LLM_TIMEOUT_SECS` variables as well as the `[llm]` TOML section.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Sample keys shipped in `.env.example` files. Treated as "no key".
pub const PLACEHOLDER_API_KEYS: &[&str] = &["your_grok_or_openai_key_here", "your_gemini_api_key_here"];

/// Default model for the Gemini backend.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Default model for OpenAI-compatible backends.
pub const DEFAULT_CHAT_MODEL: &str = "grok-beta";

fn default_provider() -> String {
    String::from("mock")
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Which backend a provider name selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProviderKind {
    /// No outbound calls; the template generator is used.
    Mock,
    /// Google generative-language `generateContent` endpoint.
    Gemini,
    /// Any chat-completions endpoint (OpenAI, Grok, local gateways).
    OpenAiCompatible,
}

impl fmt::Display for LlmProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mock => "mock",
            Self::Gemini => "gemini",
            Self::OpenAiCompatible => "openai-compatible",
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// `mock`, `gemini`, or any other name for an OpenAI-compatible endpoint.
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default)]
    pub api_key: String,

    /// Chat-completions URL. Overrides the Gemini base URL when set.
    #[serde(default)]
    pub api_url: String,

    /// Model name. Empty selects the backend default.
    #[serde(default)]
    pub model: String,

    /// Per-request timeout for outbound calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            api_url: String::new(),
            model: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    #[must_use]
    pub fn kind(&self) -> LlmProviderKind {
        match self.provider.trim().to_ascii_lowercase().as_str() {
            "" | "mock" => LlmProviderKind::Mock,
            "gemini" => LlmProviderKind::Gemini,
            _ => LlmProviderKind::OpenAiCompatible,
        }
    }

    /// True when a real backend is selected and a usable API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.kind() != LlmProviderKind::Mock && self.has_real_key()
    }

    fn has_real_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && !PLACEHOLDER_API_KEYS.contains(&key)
    }

    /// The configured model, or the backend default when unset.
    #[must_use]
    pub fn model_or_default(&self) -> &str {
        if !self.model.trim().is_empty() {
            return self.model.trim();
        }
        match self.kind() {
            LlmProviderKind::Gemini => DEFAULT_GEMINI_MODEL,
            LlmProviderKind::Mock | LlmProviderKind::OpenAiCompatible => DEFAULT_CHAT_MODEL,
        }
    }

    /// Check fields the selected backend cannot work without.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no backend is usable, or
    /// [`ConfigError::InvalidValue`] for an OpenAI-compatible backend without
    /// `api_url` or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "llm".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.kind() == LlmProviderKind::OpenAiCompatible && self.api_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "llm.api_url".to_string(),
                reason: format!(
                    "provider '{}' needs a chat-completions URL",
                    self.provider
                ),
            });
        }
        Ok(())
    }
}
