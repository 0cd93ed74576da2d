//! Backend API abstraction for the Constitutional AI service.
//!
//! The [`ConstitutionalBackend`] trait is the seam between the client state
//! controllers and the wire: production code uses the reqwest-backed
//! [`HttpBackend`], tests substitute an in-memory mock.

use async_trait::async_trait;

pub mod client;
pub mod error;
pub mod ollama;
pub mod types;

pub use client::HttpBackend;
pub use error::ApiError;
pub use ollama::OllamaClient;
pub use types::{
    AgentQueryRequest, AgentQueryResponse, AgentSource, EvidenceLevel, GpuStats, HealthReport,
    OllamaConnectivity, OverviewStats, QueryMode, ResponseMode, SearchFilters, SearchRequest,
    SearchResponse, SearchResult, ServiceStatus, SortOrder, WardenStatus,
};

/// Read/query surface of the Constitutional AI backend.
///
/// # Object Safety
///
/// Object-safe by design; controllers hold `Arc<dyn ConstitutionalBackend>`.
///
/// # Cancellation Safety
///
/// All methods are cancellation-safe: dropping a future aborts the in-flight
/// HTTP request.
#[async_trait]
pub trait ConstitutionalBackend: Send + Sync + 'static {
    /// Dispatch one question to the agentic RAG pipeline.
    async fn agent_query(
        &self,
        request: AgentQueryRequest,
    ) -> Result<AgentQueryResponse, ApiError>;

    /// Search the document index.
    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, ApiError>;

    /// Corpus overview: document counts, collections, storage size.
    async fn overview_stats(&self) -> Result<OverviewStats, ApiError>;

    /// GPU telemetry. `Ok(None)` means the fetch succeeded but the host has
    /// no GPU to report.
    async fn gpu_stats(&self) -> Result<Option<GpuStats>, ApiError>;

    /// Service health report.
    async fn health(&self) -> Result<HealthReport, ApiError>;

    /// Whether the backend is reachable and reporting healthy.
    async fn is_available(&self) -> bool {
        matches!(
            self.health().await,
            Ok(HealthReport {
                status: ServiceStatus::Healthy,
                ..
            })
        )
    }
}
