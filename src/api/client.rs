//! reqwest-backed implementation of the backend contract.

use super::error::ApiError;
use super::types::*;
use super::ConstitutionalBackend;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Endpoint paths on the Constitutional AI service.
pub mod endpoints {
    pub const AGENT_QUERY: &str = "/api/constitutional/agent/query";
    pub const SEARCH: &str = "/api/constitutional/search";
    pub const STATS_OVERVIEW: &str = "/api/constitutional/stats/overview";
    pub const GPU_STATS: &str = "/api/gpu/stats";
    pub const HEALTH: &str = "/api/health";
}

/// HTTP client for the Constitutional AI backend.
///
/// Holds a pooled reqwest client. Read endpoints (stats, health) use a short
/// timeout; the agent query gets a much longer one since a full RAG round
/// trip includes LLM generation.
pub struct HttpBackend {
    /// Base URL, e.g. "http://localhost:8000"
    base_url: String,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
    /// Timeout for read endpoints (stats, health, search)
    read_timeout: Duration,
    /// Timeout for the agent query round trip
    query_timeout: Duration,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Arc::new(Client::new()))
    }

    /// Construct with a caller-supplied client (shared pooling, tests).
    pub fn with_client(base_url: impl Into<String>, client: Arc<Client>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client,
            read_timeout: Duration::from_secs(5),
            query_timeout: Duration::from_secs(120),
        }
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, timeout: Duration) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url).timeout(timeout)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .request(Method::GET, path, self.read_timeout)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, self.read_timeout.as_millis() as u64))?;
        decode_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::POST, path, timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, timeout.as_millis() as u64))?;
        decode_json(response).await
    }
}

/// Turn a non-2xx response into `ApiError::Status`, preserving whatever error
/// body the server supplied (JSON if it parses, raw text otherwise), and
/// decode 2xx bodies into `T`.
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = format!(
            "request failed: {}",
            status.canonical_reason().unwrap_or("unknown status")
        );
        let text = response.text().await.unwrap_or_default();
        let details = if text.is_empty() {
            None
        } else {
            Some(
                serde_json::from_str(&text)
                    .unwrap_or_else(|_| serde_json::Value::String(text)),
            )
        };
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
            details,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(format!("failed to read response body: {}", e)))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl ConstitutionalBackend for HttpBackend {
    async fn agent_query(
        &self,
        request: AgentQueryRequest,
    ) -> Result<AgentQueryResponse, ApiError> {
        tracing::debug!(
            question_len = request.question.len(),
            mode = ?request.mode,
            "dispatching agent query"
        );
        self.post_json(endpoints::AGENT_QUERY, &request, self.query_timeout)
            .await
    }

    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, ApiError> {
        self.post_json(endpoints::SEARCH, &request, self.read_timeout)
            .await
    }

    async fn overview_stats(&self) -> Result<OverviewStats, ApiError> {
        self.get_json(endpoints::STATS_OVERVIEW).await
    }

    async fn gpu_stats(&self) -> Result<Option<GpuStats>, ApiError> {
        let envelope: GpuStatsEnvelope = self.get_json(endpoints::GPU_STATS).await?;
        Ok(envelope.gpu)
    }

    async fn health(&self) -> Result<HealthReport, ApiError> {
        self.get_json(endpoints::HEALTH).await
    }
}
