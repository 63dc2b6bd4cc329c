//! Event publisher trait for delivering domain events to listeners.

use async_trait::async_trait;

use crate::events::DomainEvent;
use crate::result::AppResult;

/// Sink for domain events.
///
/// Implementations must not block on slow consumers. Callers treat a
/// publish error as non-fatal: the write that produced the event has
/// already been committed.
#[async_trait]
pub trait EventPublisher: Send + Sync + std::fmt::Debug + 'static {
    /// Publish an event. Returns the number of listeners that received it.
    async fn publish(&self, event: DomainEvent) -> AppResult<usize>;
}

/// Publisher that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

#[async_trait]
impl EventPublisher for NoopPublisher {
    async fn publish(&self, _event: DomainEvent) -> AppResult<usize> {
        Ok(0)
    }
}
