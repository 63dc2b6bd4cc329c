//! Hub delivery counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters updated on every publish.
#[derive(Debug, Default)]
pub struct HubMetrics {
    /// Events handed to at least one subscriber
    pub delivered: AtomicU64,
    /// Events dropped because nobody was listening
    pub dropped: AtomicU64,
    /// Total subscribe calls
    pub subscriptions: AtomicU64,
}

impl HubMetrics {
    pub fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_subscription(&self) {
        self.subscriptions.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            delivered: self.delivered.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            subscriptions: self.subscriptions.load(Ordering::Relaxed),
        }
    }
}

/// Serializable view of [`HubMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub delivered: u64,
    pub dropped: u64,
    pub subscriptions: u64,
}
