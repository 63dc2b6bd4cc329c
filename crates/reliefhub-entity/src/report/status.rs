//! Report lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a report is in its handling lifecycle.
///
/// The usual path is pending, acknowledged, in_progress, resolved, with
/// cancelled reachable from any state. Admins may set any status.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    Acknowledged,
    InProgress,
    Resolved,
    Cancelled,
}

impl ReportStatus {
    /// Statuses shown to the public as ongoing disasters.
    pub const ACTIVE: [ReportStatus; 2] = [ReportStatus::Pending, ReportStatus::InProgress];

    /// Whether the public listing includes reports in this status.
    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Acknowledged => "acknowledged",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = reliefhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "acknowledged" => Ok(Self::Acknowledged),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(reliefhub_core::AppError::validation(format!(
                "Invalid status: '{s}'. Expected one of: pending, acknowledged, in_progress, resolved, cancelled"
            ))),
        }
    }
}
