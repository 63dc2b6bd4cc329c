//! Volunteer task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reliefhub_core::types::{ReportId, TaskId, UserId};

use super::status::TaskStatus;

/// A unit of work linking one volunteer to one report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// The assigned volunteer.
    pub volunteer_id: UserId,
    /// The report being worked.
    pub report_id: ReportId,
    pub task_description: String,
    pub status: TaskStatus,
    pub assigned_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Free-text notes written by the volunteer.
    pub notes: Option<String>,
}

impl Task {
    /// Whether the given user is the assigned volunteer.
    pub fn is_assigned_to(&self, user_id: UserId) -> bool {
        self.volunteer_id == user_id
    }

    /// Move to `status`, stamping `started_at` on first entry into
    /// in_progress and `completed_at` on every entry into completed.
    pub fn transition(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        match status {
            TaskStatus::InProgress if self.started_at.is_none() => {
                self.started_at = Some(now);
            }
            TaskStatus::Completed => {
                self.completed_at = Some(now);
            }
            _ => {}
        }
        self.status = status;
    }
}

/// Data required to assign a task.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub volunteer_id: UserId,
    pub report_id: ReportId,
    pub task_description: String,
}
