//! Cross-cutting error types for Compass.
//!
//! Domain-specific errors (`LlmError`, `DatabaseError`, `ApiError`) live in
//! their respective crates.

use thiserror::Error;

/// Errors that can be raised by any Compass crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (missing or malformed required fields).
    #[error("{0}")]
    Validation(String),
}
