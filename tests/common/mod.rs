//! Shared test utilities: an in-memory backend with call counters and
//! per-endpoint failure switches.

#![allow(dead_code)]

use async_trait::async_trait;
use grundlag::api::{
    AgentQueryRequest, AgentQueryResponse, AgentSource, ApiError, ConstitutionalBackend,
    EvidenceLevel, GpuStats, HealthReport, OverviewStats, ResponseMode, SearchRequest,
    SearchResponse, ServiceStatus, WardenStatus,
};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

/// Canned agent response used across tests.
pub fn make_agent_response(answer: &str, total_time_ms: u64) -> AgentQueryResponse {
    AgentQueryResponse {
        answer: answer.to_string(),
        sources: vec![AgentSource {
            id: "src1".to_string(),
            title: "Source 1".to_string(),
            snippet: String::new(),
            score: 0.9,
            doc_type: Some("LAG".to_string()),
            source: "test".to_string(),
        }],
        reasoning_steps: vec![],
        model_used: "test-model".to_string(),
        total_time_ms,
        mode: ResponseMode::Evidence,
        warden_status: WardenStatus::Unchanged,
        evidence_level: EvidenceLevel::High,
        corrections_applied: vec![],
    }
}

pub fn make_gpu_stats() -> GpuStats {
    GpuStats {
        name: "Test GPU".to_string(),
        memory_used: 100,
        memory_total: 1000,
        utilization: 50.0,
        temperature: 60.0,
    }
}

pub fn make_overview_stats() -> OverviewStats {
    OverviewStats {
        total_documents: 123,
        collections: Default::default(),
        storage_size_mb: 500.0,
        last_updated: "2026-01-01T00:00:00Z".to_string(),
    }
}

pub fn make_health_report() -> HealthReport {
    HealthReport {
        status: ServiceStatus::Healthy,
        version: "1.0".to_string(),
        timestamp: "2026-01-01T00:00:00Z".to_string(),
        ollama: Default::default(),
        gpu_available: true,
        checks: Default::default(),
    }
}

/// In-memory `ConstitutionalBackend`. Each endpoint counts its calls and can
/// be flipped into failure mode independently.
pub struct MockBackend {
    pub query_calls: AtomicU32,
    pub gpu_calls: AtomicU32,
    pub stats_calls: AtomicU32,
    pub health_calls: AtomicU32,

    pub fail_query: AtomicBool,
    pub fail_gpu: AtomicBool,
    pub fail_stats: AtomicBool,
    pub fail_health: AtomicBool,

    pub agent_response: Mutex<AgentQueryResponse>,
    pub gpu: Mutex<Option<GpuStats>>,
    pub last_question: Mutex<Option<String>>,
}

impl MockBackend {
    /// All endpoints healthy, canned data everywhere.
    pub fn healthy() -> Self {
        Self {
            query_calls: AtomicU32::new(0),
            gpu_calls: AtomicU32::new(0),
            stats_calls: AtomicU32::new(0),
            health_calls: AtomicU32::new(0),
            fail_query: AtomicBool::new(false),
            fail_gpu: AtomicBool::new(false),
            fail_stats: AtomicBool::new(false),
            fail_health: AtomicBool::new(false),
            agent_response: Mutex::new(make_agent_response("This is a test answer.", 1234)),
            gpu: Mutex::new(Some(make_gpu_stats())),
            last_question: Mutex::new(None),
        }
    }

    pub fn set_agent_response(&self, response: AgentQueryResponse) {
        *self.agent_response.lock().unwrap() = response;
    }

    pub fn total_metric_calls(&self) -> u32 {
        self.gpu_calls.load(Ordering::SeqCst)
            + self.stats_calls.load(Ordering::SeqCst)
            + self.health_calls.load(Ordering::SeqCst)
    }
}

fn refused() -> ApiError {
    ApiError::Network("connection refused".to_string())
}

#[async_trait]
impl ConstitutionalBackend for MockBackend {
    async fn agent_query(
        &self,
        request: AgentQueryRequest,
    ) -> Result<AgentQueryResponse, ApiError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_question.lock().unwrap() = Some(request.question);
        if self.fail_query.load(Ordering::SeqCst) {
            return Err(refused());
        }
        Ok(self.agent_response.lock().unwrap().clone())
    }

    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, ApiError> {
        Ok(SearchResponse {
            results: vec![],
            total: 0,
            page: 1,
            limit: request.limit.unwrap_or(10),
            query: request.query,
        })
    }

    async fn overview_stats(&self) -> Result<OverviewStats, ApiError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_stats.load(Ordering::SeqCst) {
            return Err(refused());
        }
        Ok(make_overview_stats())
    }

    async fn gpu_stats(&self) -> Result<Option<GpuStats>, ApiError> {
        self.gpu_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_gpu.load(Ordering::SeqCst) {
            return Err(refused());
        }
        Ok(self.gpu.lock().unwrap().clone())
    }

    async fn health(&self) -> Result<HealthReport, ApiError> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_health.load(Ordering::SeqCst) {
            return Err(refused());
        }
        Ok(make_health_report())
    }
}
