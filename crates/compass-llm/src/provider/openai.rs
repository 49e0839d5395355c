//! Chat-completions backend (OpenAI, Grok, and compatible gateways).

use async_trait::async_trait;
use compass_config::LlmConfig;
use serde::{Deserialize, Serialize};

use super::{LlmProvider, MAX_TOKENS, TEMPERATURE};
use crate::error::LlmError;
use crate::http::check_response;
use crate::prompt::SYSTEM_INSTRUCTION;

pub struct OpenAiCompatibleProvider {
    http: reqwest::Client,
    url: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiCompatibleProvider {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &LlmConfig) -> Self {
        Self {
            http,
            url: config.api_url.trim().to_string(),
            model: config.model_or_default().to_string(),
            api_key: config.api_key.trim().to_string(),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        tracing::debug!(model = %self.model, url = %self.url, "sending chat completion request");
        let resp = check_response(
            self.http
                .post(&self.url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await?,
        )
        .await?;
        let data: ChatResponse = resp.json().await?;
        first_content(data)
    }
}

fn first_content(data: ChatResponse) -> Result<String, LlmError> {
    data.choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .ok_or_else(|| LlmError::MalformedResponse("missing choices[0].message.content".to_string()))
}
