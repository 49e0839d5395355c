//! LLM pipeline error types.
//!
//! None of these reach HTTP callers: the generator logs them and falls back
//! to the template roadmap.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport error (connect, TLS, body decode, client timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Provider returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the provider asked us to wait.
        retry_after_secs: u64,
    },

    /// The call exceeded the configured deadline.
    #[error("provider call timed out after {0}s")]
    Timeout(u64),

    /// Provider response lacked the expected envelope (candidates/choices).
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Generated text did not contain a usable roadmap object.
    #[error("invalid LLM response: {0}")]
    InvalidResponse(String),

    /// Extracted JSON did not match the roadmap schema.
    #[error(transparent)]
    Schema(#[from] compass_schema::SchemaError),

    /// Provider configuration is incomplete.
    #[error(transparent)]
    Config(#[from] compass_config::ConfigError),
}
