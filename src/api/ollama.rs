//! Direct Ollama client for the CHAT-mode fallback path.
//!
//! Talks to the Ollama daemon on its own port (default 11434), bypassing the
//! RAG pipeline entirely. Used when the user wants a plain model reply with
//! no retrieval or verification.

use super::error::ApiError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OllamaRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaMessage {
    pub role: OllamaRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaMessage>,
    /// Always sent as false; this client does not consume streamed replies.
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OllamaOptions>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaChatResponse {
    pub model: String,
    pub message: OllamaMessage,
    pub done: bool,
    #[serde(default)]
    pub total_duration: Option<u64>,
}

/// Ollama /api/tags response format
#[derive(Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModelTag>,
}

#[derive(Deserialize)]
struct OllamaModelTag {
    name: String,
}

/// Minimal Ollama HTTP client: chat and model listing.
pub struct OllamaClient {
    base_url: String,
    client: Arc<reqwest::Client>,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Arc::new(reqwest::Client::new()))
    }

    pub fn with_client(base_url: impl Into<String>, client: Arc<reqwest::Client>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client,
            timeout: Duration::from_secs(120),
        }
    }

    /// Non-streaming chat completion against POST /api/chat.
    pub async fn chat(
        &self,
        mut request: OllamaChatRequest,
    ) -> Result<OllamaChatResponse, ApiError> {
        request.stream = false;
        let url = format!("{}/api/chat", self.base_url);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, self.timeout.as_millis() as u64))?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                message: format!("Ollama chat failed: {}", response.status()),
                details: None,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("failed to parse Ollama chat response: {}", e)))
    }

    /// List locally available model names via GET /api/tags.
    pub async fn list_models(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, 5000))?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                message: format!("failed to list models: {}", response.status()),
                details: None,
            });
        }

        let tags: OllamaTagsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("failed to parse Ollama tags response: {}", e)))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Whether the daemon answers with at least one model.
    pub async fn is_available(&self) -> bool {
        matches!(self.list_models().await, Ok(models) if !models.is_empty())
    }
}
