//! # compass-schema
//!
//! JSON Schema generation and validation for Compass.
//!
//! Roadmap types are defined in `compass-core` with `#[derive(JsonSchema)]`.
//! This crate builds the schemas once and validates untrusted JSON (language
//! model output, stored documents) against them. The `compass schema`
//! command exports them for frontend tooling.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
