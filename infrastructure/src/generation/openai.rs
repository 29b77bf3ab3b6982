//! OpenAI Chat Completions adapter for spot descriptions

use crate::config::{FileGeneratorConfig, require_secret};
use crate::error::AdapterBuildError;
use async_trait::async_trait;
use concierge_application::{DescriptionError, DescriptionGenerator};
use concierge_domain::DescriptionPrompt;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const USER_ROLE: &str = "user";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Description generator backed by a chat completions endpoint
pub struct OpenAiDescriptionGenerator {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: Option<u32>,
}

impl OpenAiDescriptionGenerator {
    pub fn new(
        http: reqwest::Client,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            max_tokens: None,
        }
    }

    /// Build from the `[generator]` section
    ///
    /// The per-call deadline is owned by the pipeline; the client timeout
    /// here only bounds a hung connection.
    pub fn from_config(config: &FileGeneratorConfig) -> Result<Self, AdapterBuildError> {
        let api_key = require_secret("generator.api_key", &config.api_key)?;
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let generator = Self::new(http, api_key, config.endpoint.clone(), config.model.clone());
        Ok(match config.max_tokens {
            Some(max_tokens) => generator.with_max_tokens(max_tokens),
            None => generator,
        })
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    fn extract_text(response: ChatResponse) -> Result<String, DescriptionError> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DescriptionError::Malformed("no choices in response".to_string()))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| DescriptionError::Malformed("choice has no content".to_string()))?;

        let text = content.trim();
        if text.is_empty() {
            return Err(DescriptionError::EmptyOutput);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl DescriptionGenerator for OpenAiDescriptionGenerator {
    async fn generate(&self, prompt: &DescriptionPrompt) -> Result<String, DescriptionError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: USER_ROLE,
                content: prompt.as_str(),
            }],
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DescriptionError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DescriptionError::Request(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(DescriptionError::Request(format!("HTTP {status}: {message}")));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| DescriptionError::Malformed(e.to_string()))?;

        let text = Self::extract_text(parsed)?;
        debug!(model = %self.model, chars = text.chars().count(), "Generated description");
        Ok(text)
    }
}
