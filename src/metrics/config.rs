//! Configuration for metrics polling.

use serde::{Deserialize, Serialize};

/// Configuration for the metrics polling loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Whether polling is enabled
    pub enabled: bool,
    /// Milliseconds between fetch cycles
    pub interval_ms: u64,
    /// Timeout for each sub-fetch request
    pub timeout_seconds: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 5000,
            timeout_seconds: 5,
        }
    }
}
