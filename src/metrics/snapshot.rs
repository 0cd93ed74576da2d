//! Snapshot types published by the metrics poller.

use crate::api::{GpuStats, HealthReport, OverviewStats};
use chrono::{DateTime, Utc};

/// Best-effort reading of one telemetry signal.
///
/// Distinguishes "fetched fine but nothing there" from "fetch failed, showing
/// the last good value" from "fetch failed and we never had one", so viewers
/// and tests keep the diagnostic information instead of a bare null.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal<T> {
    /// Fetched this cycle.
    Fresh(T),
    /// Fetched this cycle; the backend reported no value (e.g. GPU-less host).
    Absent,
    /// This cycle's fetch failed; carrying the last known value.
    Stale(T),
    /// Fetch failed and no previous value exists.
    Unavailable(String),
}

impl<T> Signal<T> {
    /// The carried value, fresh or stale.
    pub fn value(&self) -> Option<&T> {
        match self {
            Signal::Fresh(v) | Signal::Stale(v) => Some(v),
            Signal::Absent | Signal::Unavailable(_) => None,
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, Signal::Fresh(_) | Signal::Absent)
    }

    /// Failure description, if this cycle's fetch failed.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Signal::Unavailable(reason) => Some(reason),
            _ => None,
        }
    }

    /// Fold a fetch result into the next signal state: success replaces the
    /// value, failure degrades Fresh/Stale to Stale and keeps Unavailable.
    pub(crate) fn advance(previous: &Signal<T>, fetched: Result<Option<T>, String>) -> Signal<T>
    where
        T: Clone,
    {
        match fetched {
            Ok(Some(value)) => Signal::Fresh(value),
            Ok(None) => Signal::Absent,
            Err(reason) => match previous {
                Signal::Fresh(v) | Signal::Stale(v) => Signal::Stale(v.clone()),
                Signal::Absent | Signal::Unavailable(_) => Signal::Unavailable(reason),
            },
        }
    }
}

/// One consistent view of backend telemetry, published atomically per cycle.
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub gpu: Signal<GpuStats>,
    pub stats: Signal<OverviewStats>,
    pub health: Signal<HealthReport>,
    /// True only until the first fetch cycle completes, success or not.
    pub loading: bool,
    /// Failures from this cycle only; rebuilt every cycle, never accumulated.
    pub error: Option<String>,
    /// Time of the last cycle in which every sub-fetch succeeded.
    pub last_updated: Option<DateTime<Utc>>,
}

impl MetricsSnapshot {
    /// Initial state, before any fetch cycle has run.
    pub fn initial() -> Self {
        Self {
            gpu: Signal::Unavailable("not yet fetched".to_string()),
            stats: Signal::Unavailable("not yet fetched".to_string()),
            health: Signal::Unavailable("not yet fetched".to_string()),
            loading: true,
            error: None,
            last_updated: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot_is_loading() {
        let snapshot = MetricsSnapshot::initial();
        assert!(snapshot.loading);
        assert!(snapshot.error.is_none());
        assert!(snapshot.last_updated.is_none());
        assert!(snapshot.gpu.value().is_none());
    }

    #[test]
    fn test_advance_success_replaces_value() {
        let prev: Signal<u32> = Signal::Stale(1);
        let next = Signal::advance(&prev, Ok(Some(2)));
        assert_eq!(next, Signal::Fresh(2));
    }

    #[test]
    fn test_advance_none_becomes_absent() {
        let prev: Signal<u32> = Signal::Fresh(1);
        let next = Signal::advance(&prev, Ok(None));
        assert_eq!(next, Signal::Absent);
    }

    #[test]
    fn test_advance_failure_degrades_fresh_to_stale() {
        let prev: Signal<u32> = Signal::Fresh(7);
        let next = Signal::advance(&prev, Err("boom".to_string()));
        assert_eq!(next, Signal::Stale(7));
        assert_eq!(next.value(), Some(&7));
        assert!(!next.is_fresh());
    }

    #[test]
    fn test_advance_failure_keeps_stale_value() {
        let prev: Signal<u32> = Signal::Stale(7);
        let next = Signal::advance(&prev, Err("still down".to_string()));
        assert_eq!(next, Signal::Stale(7));
    }

    #[test]
    fn test_advance_failure_without_history_is_unavailable() {
        let prev: Signal<u32> = Signal::Unavailable("not yet fetched".to_string());
        let next = Signal::advance(&prev, Err("refused".to_string()));
        assert_eq!(next.unavailable_reason(), Some("refused"));
    }
}
