//! Google generative-language backend.

use async_trait::async_trait;
use compass_config::LlmConfig;
use serde::{Deserialize, Serialize};

use super::{LlmProvider, MAX_TOKENS, TEMPERATURE};
use crate::error::LlmError;
use crate::http::check_response;
use crate::prompt::SYSTEM_INSTRUCTION;

/// Default API host when `api_url` is unset.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiProvider {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiProvider {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &LlmConfig) -> Self {
        let base_url = if config.api_url.trim().is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            config.api_url.trim().trim_end_matches('/').to_string()
        };
        Self {
            http,
            base_url,
            model: config.model_or_default().to_string(),
            api_key: config.api_key.trim().to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key)
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let text = format!("{SYSTEM_INSTRUCTION}\n\n{prompt}");
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &text }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_TOKENS,
            },
        };

        tracing::debug!(model = %self.model, "sending gemini generateContent request");
        let resp = check_response(self.http.post(self.endpoint()).json(&body).send().await?).await?;
        let data: GenerateContentResponse = resp.json().await?;
        first_text(data)
    }
}

fn first_text(data: GenerateContentResponse) -> Result<String, LlmError> {
    data.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| {
            LlmError::MalformedResponse("missing candidates[0].content.parts[0].text".to_string())
        })
}
