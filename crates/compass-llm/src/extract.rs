//! Pull a roadmap JSON object out of free-form model output.
//!
//! Extraction order, first match wins:
//! 1. the interior of the first ```` ```json ```` fenced block;
//! 2. the span from the first `{` to the last `}`.
//!
//! The brace span is greedy, so text holding two separate top-level objects
//! yields an unparseable span and the caller falls back.

use compass_core::roadmap::Roadmap;
use compass_schema::SchemaRegistry;
use serde_json::Value;

use crate::error::LlmError;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Extract and parse the JSON object embedded in `raw`.
///
/// # Errors
///
/// Returns [`LlmError::InvalidResponse`] when no candidate span exists or the
/// chosen span is not valid JSON.
pub fn extract_json(raw: &str) -> Result<Value, LlmError> {
    if let Some(block) = fenced_json_block(raw) {
        return serde_json::from_str(block)
            .map_err(|e| LlmError::InvalidResponse(format!("fenced JSON block: {e}")));
    }

    if let Some(span) = brace_span(raw) {
        return serde_json::from_str(span)
            .map_err(|e| LlmError::InvalidResponse(format!("JSON object span: {e}")));
    }

    Err(LlmError::InvalidResponse(
        "no JSON object found in response".to_string(),
    ))
}

/// Extract, schema-check, and deserialize a roadmap from model output.
///
/// # Errors
///
/// Returns [`LlmError::InvalidResponse`] for missing/unparseable JSON or a
/// roadmap without phases, and [`LlmError::Schema`] when field types do not
/// match the roadmap schema.
pub fn parse_roadmap(raw: &str, schemas: &SchemaRegistry) -> Result<Roadmap, LlmError> {
    let value = extract_json(raw)?;
    schemas.validate("roadmap", &value)?;

    let roadmap: Roadmap = serde_json::from_value(value)
        .map_err(|e| LlmError::InvalidResponse(format!("roadmap shape: {e}")))?;

    if !roadmap.is_complete() {
        return Err(LlmError::InvalidResponse(
            "roadmap contains no phases".to_string(),
        ));
    }
    Ok(roadmap)
}

/// Interior of the first ```` ```json ```` block, trimmed.
fn fenced_json_block(raw: &str) -> Option<&str> {
    let start = raw.find(JSON_FENCE)? + JSON_FENCE.len();
    let rest = &raw[start..];
    let end = rest.find(FENCE)?;
    Some(rest[..end].trim())
}

/// First `{` through last `}` inclusive.
fn brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}
