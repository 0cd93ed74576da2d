//! Structured logging setup.
//!
//! Builds the tracing subscriber from [`LoggingConfig`]: env-filter level
//! (RUST_LOG still wins when set), pretty output for humans or JSON for
//! machine parsing.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Build the filter directives string from a LoggingConfig.
///
/// The configured level applies crate-wide; noisy dependencies stay at warn.
/// Both the lib and the bin emit under the `grundlag` target.
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    format!("warn,grundlag={}", config.level)
}

/// Initialize the global tracing subscriber.
///
/// Call once at binary startup. Returns an error if a subscriber is already
/// installed.
pub fn init(config: &LoggingConfig) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(config)));

    match config.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to init logging: {}", e))?,
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to init logging: {}", e))?,
    }

    Ok(())
}
