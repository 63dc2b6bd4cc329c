//! Alert entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reliefhub_core::types::{AlertId, ReportId};

use super::level::AlertLevel;
use crate::user::UserRole;

/// A notification, optionally tied to a report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Alert {
    /// Unique alert identifier.
    pub id: AlertId,
    pub title: String,
    pub message: String,
    pub alert_level: AlertLevel,
    /// Report this alert concerns, if any.
    pub report_id: Option<ReportId>,
    /// Audience the alert is written for.
    pub target_role: UserRole,
    /// Broadcast alerts are visible to citizens and the public.
    pub is_broadcast: bool,
    pub created_at: DateTime<Utc>,
}

/// Data required to issue an alert.
#[derive(Debug, Clone)]
pub struct CreateAlert {
    pub title: String,
    pub message: String,
    pub alert_level: AlertLevel,
    pub report_id: Option<ReportId>,
    pub target_role: UserRole,
    pub is_broadcast: bool,
}
