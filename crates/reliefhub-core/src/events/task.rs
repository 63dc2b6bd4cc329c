//! Volunteer task domain events.

use serde::{Deserialize, Serialize};

use crate::types::{ReportId, TaskId, UserId};

/// Events related to volunteer tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaskEvent {
    /// A volunteer was assigned to a report.
    Assigned {
        task_id: TaskId,
        report_id: ReportId,
        volunteer_id: UserId,
    },
    /// A task moved to a new status.
    StatusChanged {
        task_id: TaskId,
        volunteer_id: UserId,
        old_status: String,
        new_status: String,
    },
}
