use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::models::message::ChatMessage;
use crate::domain::repositories::language_model_repository::LanguageModelRepository;
use crate::infrastructure::http_client::build_http_client;

const TAGS_PATH: &str = "/api/tags";
const CHAT_PATH: &str = "/api/chat";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    name: String,
}

/// Client for a local or remote Ollama server.
pub struct OllamaRepository {
    client: Client,
}

impl OllamaRepository {
    pub fn new() -> Result<Self, DomainError> {
        let client = build_http_client(
            Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(120)),
        )
        .map_err(|error| {
            DomainError::InternalError(format!("Failed to build HTTP client: {error}"))
        })?;

        Ok(Self { client })
    }

    fn build_url(base_url: &str, path: &str) -> String {
        format!("{}{}", base_url.trim().trim_end_matches('/'), path)
    }

    async fn map_error_response(response: reqwest::Response) -> DomainError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body, status.canonical_reason().unwrap_or("error"));

        DomainError::Upstream(format!("Ollama error: {} {message}", status.as_u16()))
    }

    fn map_send_error(error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            DomainError::Timeout(format!("Ollama did not answer in time: {error}"))
        } else {
            DomainError::Upstream(format!("Failed to connect to Ollama: {error}"))
        }
    }
}

#[async_trait]
impl LanguageModelRepository for OllamaRepository {
    async fn list_models(&self, base_url: &str) -> Result<Vec<String>, DomainError> {
        let response = self
            .client
            .get(Self::build_url(base_url, TAGS_PATH))
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(Self::map_error_response(response).await);
        }

        let body: TagsResponse = response.json().await.map_err(|error| {
            DomainError::InvalidData(format!("Unexpected model list from Ollama: {error}"))
        })?;

        Ok(body.models.into_iter().map(|tag| tag.name).collect())
    }

    async fn chat(
        &self,
        base_url: &str,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, DomainError> {
        tracing::debug!(
            "Sending {} message(s) to Ollama model {}",
            messages.len(),
            model
        );

        let payload = ChatRequest {
            model,
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(Self::build_url(base_url, CHAT_PATH))
            .json(&payload)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(Self::map_error_response(response).await);
        }

        let body: ChatResponse = response.json().await.map_err(|error| {
            DomainError::InvalidData(format!("Unexpected chat response from Ollama: {error}"))
        })?;

        Ok(body.message.content)
    }
}

/// Ollama reports failures as `{"error": "..."}`.
fn extract_error_message(body: &str, default_message: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return default_message.to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let error = value.get("error");
        if let Some(message) = error
            .and_then(Value::as_str)
            .or_else(|| error.and_then(|e| e.get("message")).and_then(Value::as_str))
            .map(str::trim)
            .filter(|message| !message.is_empty())
        {
            return message.to_string();
        }
    }

    body.to_string()
}
