use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::provider::Provider;

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("No content in completion response")]
    EmptyResponse,
}

/// A chat-completion backend: system + user prompt in, generated text out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

/// Client for OpenAI-compatible `/chat/completions` endpoints.
pub struct ChatClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn for_provider(provider: &Provider, api_key: impl Into<String>) -> Self {
        Self::new(provider.config().api_url, api_key)
    }
}

#[async_trait]
impl CompletionClient for ChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let resp = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": request.model,
                "messages": [
                    {
                        "role": "system",
                        "content": request.system_prompt,
                    },
                    {
                        "role": "user",
                        "content": request.user_prompt,
                    },
                ],
                "max_tokens": request.max_tokens,
                "temperature": request.temperature,
            }))
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, message });
        }

        resp.json::<CompletionResponse>().await?.into_content()
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Content of the first choice.
    pub fn into_content(self) -> Result<String, CompletionError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_choice_content_is_returned() {
        let response: CompletionResponse = serde_json::from_str(
            r#"{
                "id": "chatcmpl-1",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": " A post. "}, "finish_reason": "stop"},
                    {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(response.into_content().unwrap(), " A post. ");
    }

    #[test]
    fn missing_choices_is_an_empty_response() {
        let response: CompletionResponse = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(matches!(
            response.into_content(),
            Err(CompletionError::EmptyResponse)
        ));
    }

    #[test]
    fn null_content_is_an_empty_response() {
        let response: CompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#,
        )
        .unwrap();
        assert!(matches!(
            response.into_content(),
            Err(CompletionError::EmptyResponse)
        ));
    }

    #[test]
    fn client_targets_provider_endpoint() {
        let client = ChatClient::for_provider(&Provider::Groq, "key");
        assert_eq!(
            client.api_url,
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }
}
