//! # compass-llm
//!
//! Turns a [`RoadmapRequest`](compass_core::request::RoadmapRequest) into a
//! roadmap.
//!
//! - [`prompt`] renders the request into prompt text.
//! - [`provider`] sends it to Gemini or a chat-completions endpoint.
//! - [`extract`] pulls the roadmap JSON out of the reply and schema-checks it.
//! - [`mock`] builds the deterministic template roadmap.
//! - [`RoadmapGenerator`] ties these together and always returns a roadmap.

pub mod extract;
pub mod generator;
pub mod mock;
pub mod prompt;
pub mod provider;

mod error;
mod http;

pub use error::LlmError;
pub use generator::RoadmapGenerator;
pub use mock::{mock_roadmap, mock_roadmap_for};
pub use provider::{LlmProvider, provider_from_config};
