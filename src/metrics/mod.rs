//! Metrics polling for backend telemetry.
//!
//! [`MetricsPoller`] owns a fixed-interval loop against the three read-only
//! status endpoints (GPU, corpus overview, health) and publishes one merged
//! [`MetricsSnapshot`] per cycle through a watch channel. Partial results are
//! never visible: viewers only ever see a whole cycle.

mod config;
mod snapshot;

pub use config::PollConfig;
pub use snapshot::{MetricsSnapshot, Signal};

use crate::api::ConstitutionalBackend;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Background poller for backend telemetry.
pub struct MetricsPoller {
    backend: Arc<dyn ConstitutionalBackend>,
    config: PollConfig,
    tx: watch::Sender<MetricsSnapshot>,
}

impl MetricsPoller {
    /// Create a poller and the receiver viewers subscribe to. The receiver
    /// starts at [`MetricsSnapshot::initial`] (loading state).
    pub fn new(
        backend: Arc<dyn ConstitutionalBackend>,
        config: PollConfig,
    ) -> (Self, watch::Receiver<MetricsSnapshot>) {
        let (tx, rx) = watch::channel(MetricsSnapshot::initial());
        (
            Self {
                backend,
                config,
                tx,
            },
            rx,
        )
    }

    /// Run one fetch cycle and publish the merged snapshot.
    ///
    /// The three sub-fetches run concurrently; each failure is caught at its
    /// own call site and logged so one unavailable signal never blocks the
    /// others. Previously known values survive a failed fetch as
    /// [`Signal::Stale`]; the cycle-level `error` field reports what failed.
    pub async fn fetch_once(&self) -> MetricsSnapshot {
        let previous = self.tx.borrow().clone();

        let (gpu, stats, health) = tokio::join!(
            self.backend.gpu_stats(),
            self.backend.overview_stats(),
            self.backend.health(),
        );

        let mut failures = Vec::new();

        let gpu = match gpu {
            Ok(value) => Signal::advance(&previous.gpu, Ok(value)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch GPU stats");
                failures.push(format!("gpu: {}", e));
                Signal::advance(&previous.gpu, Err(e.to_string()))
            }
        };

        let stats = match stats {
            Ok(value) => Signal::advance(&previous.stats, Ok(Some(value))),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch overview stats");
                failures.push(format!("stats: {}", e));
                Signal::advance(&previous.stats, Err(e.to_string()))
            }
        };

        let health = match health {
            Ok(value) => Signal::advance(&previous.health, Ok(Some(value))),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch health");
                failures.push(format!("health: {}", e));
                Signal::advance(&previous.health, Err(e.to_string()))
            }
        };

        let clean_cycle = failures.is_empty();
        let snapshot = MetricsSnapshot {
            gpu,
            stats,
            health,
            loading: false,
            error: if clean_cycle {
                None
            } else {
                Some(failures.join("; "))
            },
            last_updated: if clean_cycle {
                Some(chrono::Utc::now())
            } else {
                previous.last_updated
            },
        };

        // Single send per cycle keeps the published view atomic.
        self.tx.send_replace(snapshot.clone());
        snapshot
    }

    /// Current snapshot without fetching.
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.tx.borrow().clone()
    }

    /// Start the polling loop. The first cycle fires immediately, then one
    /// per interval. Cancelling the token stops the loop; no fetch is issued
    /// after cancellation. With polling disabled in the config, no loop is
    /// started and no fetch is ever issued.
    pub fn start(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            if !self.config.enabled {
                tracing::info!("metrics polling disabled, not starting");
                return;
            }

            let mut interval =
                tokio::time::interval(Duration::from_millis(self.config.interval_ms));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            tracing::info!(
                interval_ms = self.config.interval_ms,
                "metrics poller started"
            );

            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        tracing::info!("metrics poller shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let snapshot = self.fetch_once().await;
                        tracing::debug!(
                            fresh_gpu = snapshot.gpu.is_fresh(),
                            fresh_stats = snapshot.stats.is_fresh(),
                            fresh_health = snapshot.health.is_fresh(),
                            "metrics cycle completed"
                        );
                    }
                }
            }
        })
    }
}
