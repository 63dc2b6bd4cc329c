//! Alert-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::{AlertId, ReportId};

/// Events related to alert broadcasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AlertEvent {
    /// A new alert was issued.
    Created {
        alert_id: AlertId,
        title: String,
        level: String,
        report_id: Option<ReportId>,
        is_broadcast: bool,
    },
}
