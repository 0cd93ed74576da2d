//! Watch command implementation

use crate::api::{ConstitutionalBackend, HttpBackend};
use crate::cli::output::format_snapshot_pretty;
use crate::cli::WatchArgs;
use crate::config::ConsoleConfig;
use crate::metrics::MetricsPoller;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub async fn run_watch(config: &ConsoleConfig, args: &WatchArgs) -> anyhow::Result<()> {
    let mut poll = config.poll.clone();
    if !poll.enabled {
        anyhow::bail!("metrics polling is disabled in the configuration ([poll] enabled = false)");
    }
    if let Some(interval_ms) = args.interval_ms {
        poll.interval_ms = interval_ms;
    }

    let backend: Arc<dyn ConstitutionalBackend> = Arc::new(
        HttpBackend::new(&config.backend_url)
            .read_timeout(Duration::from_secs(poll.timeout_seconds)),
    );

    let (poller, mut rx) = MetricsPoller::new(backend, poll);
    let cancel = CancellationToken::new();
    let handle = poller.start(cancel.clone());

    let mut cycles = 0u64;
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = rx.borrow_and_update().clone();
                println!("{}", format_snapshot_pretty(&snapshot));
                cycles += 1;
                if let Some(count) = args.count {
                    if cycles >= count {
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    // Paired teardown: no fetch survives the watch command.
    cancel.cancel();
    handle.await?;
    Ok(())
}
