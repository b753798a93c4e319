//! Bridge counters.
//!
//! Counters are atomics so adapters and the controller can record through a
//! shared `Arc` without taking the controller lock.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Live counters for one bridge instance.
#[derive(Debug, Default)]
pub struct BridgeMetrics {
    actions_relayed: AtomicU64,
    events_applied: AtomicU64,
    echoes_suppressed: AtomicU64,
    stale_messages_dropped: AtomicU64,
    malformed_messages_dropped: AtomicU64,
    backend_failures: AtomicU64,
    markers_expired: AtomicU64,
    replays: AtomicU64,
    deactivations: AtomicU64,
}

/// Point-in-time copy of [`BridgeMetrics`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub actions_relayed: u64,
    pub events_applied: u64,
    pub echoes_suppressed: u64,
    pub stale_messages_dropped: u64,
    pub malformed_messages_dropped: u64,
    pub backend_failures: u64,
    pub markers_expired: u64,
    pub replays: u64,
    pub deactivations: u64,
}

impl BridgeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_action_relayed(&self) {
        self.actions_relayed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_applied(&self) {
        self.events_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_echo_suppressed(&self) {
        self.echoes_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale_message(&self) {
        self.stale_messages_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_malformed_message(&self) {
        self.malformed_messages_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_backend_failure(&self) {
        self.backend_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_markers_expired(&self, count: usize) {
        self.markers_expired
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_replay(&self) {
        self.replays.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_deactivation(&self) {
        self.deactivations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            actions_relayed: self.actions_relayed.load(Ordering::Relaxed),
            events_applied: self.events_applied.load(Ordering::Relaxed),
            echoes_suppressed: self.echoes_suppressed.load(Ordering::Relaxed),
            stale_messages_dropped: self.stale_messages_dropped.load(Ordering::Relaxed),
            malformed_messages_dropped: self.malformed_messages_dropped.load(Ordering::Relaxed),
            backend_failures: self.backend_failures.load(Ordering::Relaxed),
            markers_expired: self.markers_expired.load(Ordering::Relaxed),
            replays: self.replays.load(Ordering::Relaxed),
            deactivations: self.deactivations.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = BridgeMetrics::new();
        metrics.record_replay();
        metrics.record_replay();
        metrics.record_markers_expired(3);
        metrics.record_echo_suppressed();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.replays, 2);
        assert_eq!(snapshot.markers_expired, 3);
        assert_eq!(snapshot.echoes_suppressed, 1);
        assert_eq!(snapshot.backend_failures, 0);
    }
}
