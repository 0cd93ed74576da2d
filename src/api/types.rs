//! Wire types for the Constitutional AI backend, aligned with its Pydantic
//! models. Raw pass-through: no invariants are enforced client-side.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response mode hint sent with an agent query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Server picks the mode based on the question.
    #[default]
    Auto,
    Chat,
    Assist,
    Evidence,
}

/// Mode the server actually answered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseMode {
    Chat,
    Assist,
    Evidence,
    #[serde(other)]
    Unknown,
}

/// Backend-assigned confidence category for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvidenceLevel {
    High,
    Low,
    None,
    /// Any value this client version doesn't recognize.
    #[serde(other)]
    Unknown,
}

/// Jail Warden post-processing outcome. Passed through, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WardenStatus {
    Unchanged,
    TermCorrected,
    QuestionRewritten,
    FactVerified,
    FactUnverified,
    CitationsStripped,
    Error,
    #[serde(other)]
    Unknown,
}

/// Request body for POST /api/constitutional/agent/query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentQueryRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<QueryMode>,
}

/// A cited source returned alongside an agent answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    pub score: f64,
    pub doc_type: Option<String>,
    #[serde(default)]
    pub source: String,
}

/// Response from the full RAG pipeline:
/// vector search, LLM generation, Jail Warden verification, evidence gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentQueryResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<AgentSource>,
    #[serde(default)]
    pub reasoning_steps: Vec<String>,
    #[serde(default)]
    pub model_used: String,
    pub total_time_ms: u64,
    pub mode: ResponseMode,
    pub warden_status: WardenStatus,
    pub evidence_level: EvidenceLevel,
    #[serde(default)]
    pub corrections_applied: Vec<String>,
}

/// Sort order for document search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Relevance,
    Date,
}

/// Optional filters for document search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// Request body for POST /api/constitutional/search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: None,
            page: None,
            limit: None,
            sort: None,
        }
    }
}

/// A single document hit from the search index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub snippet: String,
    #[serde(default)]
    pub content: Option<String>,
    pub score: f64,
    #[serde(default)]
    pub source: String,
    pub doc_type: Option<String>,
    pub date: Option<String>,
}

/// Response from POST /api/constitutional/search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub query: String,
}

/// Corpus overview from GET /api/constitutional/stats/overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_documents: u64,
    #[serde(default)]
    pub collections: HashMap<String, u64>,
    pub storage_size_mb: f64,
    #[serde(default)]
    pub last_updated: String,
}

/// GPU telemetry from GET /api/gpu/stats. Memory figures are MB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuStats {
    pub name: String,
    pub memory_used: u64,
    pub memory_total: u64,
    pub utilization: f64,
    pub temperature: f64,
}

/// Envelope around the GPU stats endpoint; `gpu` is null on GPU-less hosts.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GpuStatsEnvelope {
    pub gpu: Option<GpuStats>,
}

/// Overall service status reported by GET /api/health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Ollama connectivity sub-record inside the health report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllamaConnectivity {
    pub connected: bool,
    pub version: Option<String>,
    #[serde(default)]
    pub models_available: Vec<String>,
    #[serde(default)]
    pub models_loaded: Vec<String>,
}

/// Full health report from GET /api/health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub ollama: OllamaConnectivity,
    #[serde(default)]
    pub gpu_available: bool,
    #[serde(default)]
    pub checks: HashMap<String, bool>,
}
