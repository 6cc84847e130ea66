//! OpenAI-compatible chat completions backend
//!
//! Works against api.openai.com or any endpoint speaking the same API
//! (configure `base_url` to point elsewhere). The API key is read from the
//! process environment once at startup.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{CompletionBackend, CompletionError};
use crate::config::ModelConfig;

/// OpenAI-compatible backend
pub struct OpenAiBackend {
    client: Client,
    base_url: String,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
}

impl OpenAiBackend {
    pub fn new(config: &ModelConfig) -> Self {
        let client = Client::builder()
            .user_agent("nlsql-mcp/0.1")
            .build()
            .expect("Failed to create HTTP client");

        let api_key = std::env::var(&config.api_key_env).ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            tracing::warn!(
                "{} is not set; the nl-to-sql tool will report an error per call",
                config.api_key_env
            );
        }

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.name.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key,
        }
    }
}

// Chat completions API request/response types
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Pull the human-readable message out of an API error body, falling back
/// to the raw body when it is not the usual `{"error": {"message": ...}}`
/// shape.
fn api_error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    fn credential_env(&self) -> &str {
        &self.api_key_env
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let key = self.api_key.as_deref().unwrap_or_default();
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status,
                body: api_error_detail(&body),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(CompletionError::Empty)?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_detail_extracts_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(api_error_detail(body), "Incorrect API key provided");
    }

    #[test]
    fn test_api_error_detail_falls_back_to_raw_body() {
        assert_eq!(api_error_detail("upstream timeout"), "upstream timeout");
        assert_eq!(api_error_detail(r#"{"detail": "other shape"}"#), r#"{"detail": "other shape"}"#);
    }
}
