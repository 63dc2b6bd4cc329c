//! Domain events emitted by ReliefHub operations.
//!
//! Events are handed to an [`EventPublisher`](crate::traits::EventPublisher)
//! after the corresponding write has been committed.

pub mod alert;
pub mod report;
pub mod task;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::UserId;

pub use alert::AlertEvent;
pub use report::ReportEvent;
pub use task::TaskEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if applicable).
    pub actor_id: Option<UserId>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// An alert-related event.
    Alert(AlertEvent),
    /// A report-related event.
    Report(ReportEvent),
    /// A task-related event.
    Task(TaskEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<UserId>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }

    /// Dotted event name, e.g. `alert.created`.
    pub fn name(&self) -> &'static str {
        match &self.payload {
            EventPayload::Alert(AlertEvent::Created { .. }) => "alert.created",
            EventPayload::Report(ReportEvent::Submitted { .. }) => "report.submitted",
            EventPayload::Report(ReportEvent::StatusChanged { .. }) => "report.status_changed",
            EventPayload::Task(TaskEvent::Assigned { .. }) => "task.assigned",
            EventPayload::Task(TaskEvent::StatusChanged { .. }) => "task.status_changed",
        }
    }
}
