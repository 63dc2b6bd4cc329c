//! Single-node pub/sub over `tokio::sync::broadcast`.

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, trace};

use reliefhub_core::config::realtime::RealtimeConfig;
use reliefhub_core::events::DomainEvent;
use reliefhub_core::result::AppResult;
use reliefhub_core::traits::EventPublisher;

use crate::metrics::{HubMetrics, MetricsSnapshot};

/// Fans every published event out to all current subscribers.
///
/// With no subscribers the event is dropped and `publish` reports zero
/// receivers. Slow subscribers lag rather than block publishers.
#[derive(Debug)]
pub struct BroadcastHub {
    sender: broadcast::Sender<DomainEvent>,
    metrics: HubMetrics,
}

impl BroadcastHub {
    /// Create a hub buffering up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            metrics: HubMetrics::default(),
        }
    }

    pub fn from_config(config: &RealtimeConfig) -> Self {
        Self::new(config.channel_capacity)
    }

    /// Subscribe to every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.metrics.record_subscription();
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[async_trait]
impl EventPublisher for BroadcastHub {
    async fn publish(&self, event: DomainEvent) -> AppResult<usize> {
        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => {
                self.metrics.record_delivered();
                trace!(event = name, receivers, "Event broadcast");
                Ok(receivers)
            }
            Err(_) => {
                self.metrics.record_dropped();
                debug!(event = name, "No subscribers, event dropped");
                Ok(0)
            }
        }
    }
}
