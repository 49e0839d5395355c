//! Shared HTTP response checks for provider clients.
//!
//! Keeps status handling (429 with `Retry-After`, other non-success codes) in
//! one place so the Gemini and chat-completions modules only build requests
//! and map response envelopes.

use crate::error::LlmError;

/// Upper bound on how much of an error body is kept in [`LlmError::Api`].
const MAX_ERROR_BODY: usize = 512;

/// Check a provider response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** -> [`LlmError::RateLimited`] with `Retry-After`
///   parsing (60 s when absent or unparseable).
/// - **Non-success status** -> [`LlmError::Api`] with status code and a
///   truncated response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(LlmError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let mut message = resp.text().await.unwrap_or_default();
        truncate_on_char_boundary(&mut message, MAX_ERROR_BODY);
        return Err(LlmError::Api { status, message });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

fn truncate_on_char_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
}
