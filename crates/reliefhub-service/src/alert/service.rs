//! Alert creation and the role-specific alert feeds.

use std::sync::Arc;

use tracing::info;

use reliefhub_core::error::AppError;
use reliefhub_core::events::{AlertEvent, EventPayload};
use reliefhub_core::result::AppResult;
use reliefhub_core::traits::EventPublisher;
use reliefhub_core::types::ReportId;
use reliefhub_database::repositories::{AlertRepository, ReportRepository};
use reliefhub_entity::alert::{Alert, AlertLevel, CreateAlert};
use reliefhub_entity::user::UserRole;

use crate::context::RequestContext;
use crate::publish::emit;

/// Alerts shown on the admin console.
const ADMIN_FEED_LIMIT: i64 = 50;
/// Broadcast alerts shown to signed-in citizens.
const CITIZEN_FEED_LIMIT: i64 = 20;
/// Default and ceiling of the public feed.
pub const PUBLIC_FEED_DEFAULT: i64 = 20;
pub const PUBLIC_FEED_MAX: i64 = 100;

/// Fields accepted when issuing an alert.
#[derive(Debug, Clone, Default)]
pub struct NewAlert {
    pub title: String,
    pub message: String,
    pub alert_level: Option<String>,
    pub report_id: Option<ReportId>,
    pub is_broadcast: Option<bool>,
    pub target_role: Option<String>,
}

/// Handles alert operations.
#[derive(Debug, Clone)]
pub struct AlertService {
    alert_repo: Arc<AlertRepository>,
    report_repo: Arc<ReportRepository>,
    events: Arc<dyn EventPublisher>,
}

impl AlertService {
    /// Creates a new alert service.
    pub fn new(
        alert_repo: Arc<AlertRepository>,
        report_repo: Arc<ReportRepository>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            alert_repo,
            report_repo,
            events,
        }
    }

    /// Stores an alert and publishes `alert.created`.
    pub async fn create(&self, ctx: &RequestContext, input: NewAlert) -> AppResult<Alert> {
        let title = input.title.trim();
        let message = input.message.trim();
        if title.is_empty() || message.is_empty() {
            return Err(AppError::validation("Missing required fields"));
        }
        let alert_level = match input.alert_level.as_deref().map(str::trim) {
            None | Some("") => AlertLevel::default(),
            Some(raw) => raw.parse()?,
        };
        let target_role = match input.target_role.as_deref().map(str::trim) {
            None | Some("") => UserRole::Citizen,
            Some(raw) => raw.parse()?,
        };
        if let Some(report_id) = input.report_id {
            self.report_repo
                .find_by_id(report_id)
                .await?
                .ok_or_else(|| AppError::not_found("Report not found"))?;
        }

        let alert = self
            .alert_repo
            .create(&CreateAlert {
                title: title.to_string(),
                message: message.to_string(),
                alert_level,
                report_id: input.report_id,
                target_role,
                is_broadcast: input.is_broadcast.unwrap_or(true),
            })
            .await?;

        info!(user_id = %ctx.user_id, alert_id = %alert.id, level = %alert.alert_level, "Alert issued");
        emit(
            self.events.as_ref(),
            Some(ctx.user_id),
            EventPayload::Alert(AlertEvent::Created {
                alert_id: alert.id,
                title: alert.title.clone(),
                level: alert.alert_level.to_string(),
                report_id: alert.report_id,
                is_broadcast: alert.is_broadcast,
            }),
        )
        .await;

        Ok(alert)
    }

    /// Latest alerts of every kind, for admins.
    pub async fn admin_feed(&self) -> AppResult<Vec<Alert>> {
        self.alert_repo.find_recent(ADMIN_FEED_LIMIT, false).await
    }

    /// Latest broadcast alerts, for citizens.
    pub async fn citizen_feed(&self) -> AppResult<Vec<Alert>> {
        self.alert_repo.find_recent(CITIZEN_FEED_LIMIT, true).await
    }

    /// Latest broadcast alerts, capped at `limit` (clamped to 1..=100).
    pub async fn public_feed(&self, limit: Option<i64>) -> AppResult<Vec<Alert>> {
        let limit = limit
            .unwrap_or(PUBLIC_FEED_DEFAULT)
            .clamp(1, PUBLIC_FEED_MAX);
        self.alert_repo.find_recent(limit, true).await
    }

    /// The `n` latest broadcast alerts.
    pub async fn recent_broadcast(&self, n: i64) -> AppResult<Vec<Alert>> {
        self.alert_repo.find_recent(n, true).await
    }
}
