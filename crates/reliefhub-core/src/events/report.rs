//! Report-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::{ReportId, UserId};

/// Events related to disaster reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReportEvent {
    /// A citizen filed a new report.
    Submitted {
        /// The report ID.
        report_id: ReportId,
        /// The reporting citizen.
        reporter_id: UserId,
        /// Severity label.
        severity: String,
    },
    /// An admin changed a report's status.
    StatusChanged {
        /// The report ID.
        report_id: ReportId,
        /// The previous status.
        old_status: String,
        /// The new status.
        new_status: String,
    },
}
