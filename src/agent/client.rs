//! Chat-completion API client (OpenAI-compatible).
//!
//! One thin client shared by the coach, the extractor and the guide
//! prompts. Calls are single-shot: no retries, the HTTP timeout is the
//! only bound.

use crate::error::{CoachError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Completion API client configuration
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// API key
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Request timeout
    pub timeout_secs: u64,
    /// Model to use
    pub model: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 30,
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl CompletionConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            timeout_secs: 30,
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Chat API message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat API request
#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Chat API response
#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Completion API client
pub struct CompletionClient {
    config: CompletionConfig,
    http: Client,
}

impl CompletionClient {
    /// Create a new client
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoachError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(CompletionConfig::from_env())
    }

    /// Check if client is properly configured
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// One chat round-trip; returns the first choice's content
    pub async fn chat(&self, messages: Vec<ChatMessage>, temperature: f32) -> Result<String> {
        if !self.is_configured() {
            return Err(CoachError::Upstream(
                "completion API key not configured".to_string(),
            ));
        }

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            temperature: Some(temperature),
        };

        debug!(model = %request.model, "sending chat completion request");

        let response = self
            .http
            .post(format!(
                "{}/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "completion API error: {}", body);
            return Err(CoachError::Upstream(format!(
                "completion API error {status}: {body}"
            )));
        }

        let reply: ChatResponse = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CoachError::Upstream("completion reply had no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_without_api_key() {
        let client = CompletionClient::new(CompletionConfig::default()).unwrap();
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn chat_fails_fast_when_unconfigured() {
        let client = CompletionClient::new(CompletionConfig::default()).unwrap();
        let err = client
            .chat(vec![ChatMessage::user("hi")], 0.2)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }

    #[test]
    fn response_decodes_first_choice() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let decoded: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.choices[0].message.content, "hello");
    }
}
