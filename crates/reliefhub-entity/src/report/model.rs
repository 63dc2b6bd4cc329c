//! Disaster report entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reliefhub_core::types::{ReportId, UserId};

use super::severity::Severity;
use super::status::ReportStatus;

/// A citizen-filed record describing a disaster event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    /// Unique report identifier.
    pub id: ReportId,
    pub title: String,
    pub description: String,
    /// Free-text location as entered by the reporter.
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub severity: Severity,
    pub status: ReportStatus,
    /// The filing citizen. Immutable.
    pub reporter_id: UserId,
    /// Optional link to a photo of the scene.
    pub image_url: Option<String>,
    /// Filing time. Immutable.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// First time the report entered `resolved`.
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Report {
    /// Whether the given user filed this report.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.reporter_id == user_id
    }
}

/// Data required to file a new report.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub title: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub severity: Severity,
    pub image_url: Option<String>,
    pub reporter_id: UserId,
}

/// Fields a citizen may change on their own report. `None` keeps the
/// stored value.
#[derive(Debug, Clone, Default)]
pub struct ReportChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<Severity>,
}

impl ReportChanges {
    /// Apply the provided fields onto a report.
    pub fn apply(self, report: &mut Report) {
        if let Some(title) = self.title {
            report.title = title;
        }
        if let Some(description) = self.description {
            report.description = description;
        }
        if let Some(severity) = self.severity {
            report.severity = severity;
        }
    }
}
