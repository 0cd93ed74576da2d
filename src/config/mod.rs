//! Configuration module for the console.
//!
//! Layered loading: defaults, then a TOML file, then `GRUNDLAG_*` environment
//! variables, then CLI flags (highest priority, applied by the CLI layer).
//!
//! # Example
//!
//! ```rust
//! use grundlag::config::ConsoleConfig;
//!
//! let config = ConsoleConfig::default();
//! assert_eq!(config.backend_url, "http://localhost:8000");
//!
//! let config: ConsoleConfig = toml::from_str(r#"
//! backend_url = "http://rack:8000"
//!
//! [poll]
//! interval_ms = 2000
//! "#).unwrap();
//! assert_eq!(config.poll.interval_ms, 2000);
//! ```

pub mod error;
pub mod logging;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

// Re-export PollConfig from the metrics module
pub use crate::metrics::PollConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of the Constitutional AI backend
    pub backend_url: String,
    /// Base URL of the Ollama daemon (direct-chat fallback)
    pub ollama_url: String,
    /// Timeout for the agent query round trip, in seconds
    pub query_timeout_seconds: u64,
    /// Metrics polling settings
    pub poll: PollConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            query_timeout_seconds: 120,
            poll: PollConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from a TOML file.
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supports GRUNDLAG_* variables for common settings. Invalid values are
    /// silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("GRUNDLAG_BACKEND_URL") {
            self.backend_url = url;
        }
        if let Ok(url) = std::env::var("GRUNDLAG_OLLAMA_URL") {
            self.ollama_url = url;
        }
        if let Ok(interval) = std::env::var("GRUNDLAG_POLL_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.poll.interval_ms = ms;
            }
        }
        if let Ok(timeout) = std::env::var("GRUNDLAG_QUERY_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.parse() {
                self.query_timeout_seconds = seconds;
            }
        }
        if let Ok(level) = std::env::var("GRUNDLAG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("GRUNDLAG_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }
        self
    }

    /// Reject obviously unusable values before any network call is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err(ConfigError::Validation {
                field: "backend_url".to_string(),
                message: format!("not an http(s) URL: {}", self.backend_url),
            });
        }
        if self.poll.interval_ms == 0 {
            return Err(ConfigError::Validation {
                field: "poll.interval_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
