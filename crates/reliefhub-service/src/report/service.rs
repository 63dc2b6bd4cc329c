//! Report filing, ownership-checked citizen access, admin triage and
//! the public disaster feed.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use reliefhub_core::error::AppError;
use reliefhub_core::events::{EventPayload, ReportEvent};
use reliefhub_core::result::AppResult;
use reliefhub_core::traits::EventPublisher;
use reliefhub_core::types::{Page, PageRequest, ReportId, UserId};
use reliefhub_database::repositories::{ReportRepository, TaskRepository, UserRepository};
use reliefhub_entity::report::{CreateReport, Report, ReportChanges, ReportStatus, Severity};
use reliefhub_entity::user::User;

use crate::context::RequestContext;
use crate::lookup::users_by_id;
use crate::publish::emit;
use crate::task::TaskDetails;

/// Fields accepted when a citizen files a report.
#[derive(Debug, Clone, Default)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub severity: Option<String>,
    pub image_url: Option<String>,
}

/// A report with its reporter and, on detail views, its tasks.
#[derive(Debug, Clone)]
pub struct ReportDetails {
    pub report: Report,
    pub reporter: Option<User>,
    pub tasks: Option<Vec<TaskDetails>>,
}

/// Compact progress view for the filing citizen.
#[derive(Debug, Clone)]
pub struct ReportStatusView {
    pub report_id: ReportId,
    pub status: ReportStatus,
    pub title: String,
    pub assigned_volunteers: i64,
    pub last_update: DateTime<Utc>,
}

/// Handles disaster report operations.
#[derive(Debug, Clone)]
pub struct ReportService {
    report_repo: Arc<ReportRepository>,
    task_repo: Arc<TaskRepository>,
    user_repo: Arc<UserRepository>,
    events: Arc<dyn EventPublisher>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        report_repo: Arc<ReportRepository>,
        task_repo: Arc<TaskRepository>,
        user_repo: Arc<UserRepository>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            report_repo,
            task_repo,
            user_repo,
            events,
        }
    }

    /// Files a new report in `pending` on behalf of the caller.
    pub async fn submit(&self, ctx: &RequestContext, input: NewReport) -> AppResult<ReportDetails> {
        let title = input.title.trim();
        let description = input.description.trim();
        let location = input.location.trim();
        if title.is_empty() || description.is_empty() || location.is_empty() {
            return Err(AppError::validation("Missing required fields"));
        }
        let severity = match input.severity.as_deref().map(str::trim) {
            None | Some("") => Severity::default(),
            Some(raw) => raw.parse()?,
        };

        let report = self
            .report_repo
            .create(&CreateReport {
                title: title.to_string(),
                description: description.to_string(),
                location: location.to_string(),
                latitude: input.latitude,
                longitude: input.longitude,
                severity,
                image_url: input.image_url.filter(|u| !u.trim().is_empty()),
                reporter_id: ctx.user_id,
            })
            .await?;

        info!(user_id = %ctx.user_id, report_id = %report.id, severity = %report.severity, "Report submitted");
        emit(
            self.events.as_ref(),
            Some(ctx.user_id),
            EventPayload::Report(ReportEvent::Submitted {
                report_id: report.id,
                reporter_id: ctx.user_id,
                severity: report.severity.to_string(),
            }),
        )
        .await;

        self.with_reporter(report).await
    }

    /// The caller's own reports, newest first.
    pub async fn list_own(&self, ctx: &RequestContext) -> AppResult<Vec<ReportDetails>> {
        let reports = self.report_repo.find_by_reporter(ctx.user_id).await?;
        self.with_reporters(reports).await
    }

    /// One page of the caller's reports, newest first.
    pub async fn page_own(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<Page<ReportDetails>> {
        let page = self.report_repo.find_page_by_reporter(ctx.user_id, page).await?;
        let items = self.with_reporters(page.items).await?;
        Ok(Page {
            items,
            total: page.total,
            pages: page.pages,
            current_page: page.current_page,
        })
    }

    /// One of the caller's reports, with tasks.
    pub async fn get_own(&self, ctx: &RequestContext, id: ReportId) -> AppResult<ReportDetails> {
        let report = self.find_owned(ctx, id).await?;
        self.with_tasks(report).await
    }

    /// Merges title, description and severity into one of the caller's reports.
    pub async fn update_own(
        &self,
        ctx: &RequestContext,
        id: ReportId,
        title: Option<String>,
        description: Option<String>,
        severity: Option<String>,
    ) -> AppResult<ReportDetails> {
        let mut report = self.find_owned(ctx, id).await?;
        let changes = ReportChanges {
            title: title.map(|t| t.trim().to_string()),
            description: description.map(|d| d.trim().to_string()),
            severity: severity.as_deref().map(str::parse::<Severity>).transpose()?,
        };
        if changes.title.as_deref() == Some("") || changes.description.as_deref() == Some("") {
            return Err(AppError::validation("Title and description cannot be empty"));
        }
        changes.apply(&mut report);

        let report = self.report_repo.update_content(&report).await?;
        info!(user_id = %ctx.user_id, report_id = %report.id, "Report updated");
        self.with_reporter(report).await
    }

    /// Progress summary of one of the caller's reports.
    pub async fn status_of_own(
        &self,
        ctx: &RequestContext,
        id: ReportId,
    ) -> AppResult<ReportStatusView> {
        let report = self.find_owned(ctx, id).await?;
        let assigned_volunteers = self.task_repo.count_by_report(report.id).await?;
        Ok(ReportStatusView {
            report_id: report.id,
            status: report.status,
            title: report.title,
            assigned_volunteers,
            last_update: report.updated_at,
        })
    }

    /// Admin listing: every report, newest first, with tasks embedded.
    pub async fn list_all(
        &self,
        status: Option<ReportStatus>,
        page: PageRequest,
    ) -> AppResult<Page<ReportDetails>> {
        let page = self.report_repo.find_page(status, page).await?;
        let mut details = Vec::with_capacity(page.items.len());
        let reporters = users_by_id(&self.user_repo, page.items.iter().map(|r| r.reporter_id)).await?;
        for report in &page.items {
            let tasks = self.tasks_for(report.id).await?;
            details.push(ReportDetails {
                reporter: reporters.get(&report.reporter_id).cloned(),
                report: report.clone(),
                tasks: Some(tasks),
            });
        }
        Ok(Page {
            items: details,
            total: page.total,
            pages: page.pages,
            current_page: page.current_page,
        })
    }

    /// Admin detail view of any report.
    pub async fn get(&self, id: ReportId) -> AppResult<ReportDetails> {
        let report = self.find(id).await?;
        self.with_tasks(report).await
    }

    /// Sets a report's status. Any status may follow any other; entering
    /// `resolved` stamps `resolved_at` the first time.
    pub async fn set_status(
        &self,
        ctx: &RequestContext,
        id: ReportId,
        status: ReportStatus,
    ) -> AppResult<ReportDetails> {
        let report = self.find(id).await?;
        let resolved_at = match (status, report.resolved_at) {
            (ReportStatus::Resolved, None) => Some(Utc::now()),
            (_, existing) => existing,
        };
        let old_status = report.status;
        let report = self
            .report_repo
            .update_status(id, status, resolved_at)
            .await?;

        info!(
            user_id = %ctx.user_id,
            report_id = %id,
            old_status = %old_status,
            new_status = %status,
            "Report status changed"
        );
        emit(
            self.events.as_ref(),
            Some(ctx.user_id),
            EventPayload::Report(ReportEvent::StatusChanged {
                report_id: id,
                old_status: old_status.to_string(),
                new_status: status.to_string(),
            }),
        )
        .await;

        self.with_reporter(report).await
    }

    /// Public feed of ongoing disasters (pending or in progress).
    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<ReportDetails>> {
        let reports = self
            .report_repo
            .find_by_statuses(&ReportStatus::ACTIVE, limit)
            .await?;
        self.with_reporters(reports).await
    }

    /// Loads a report or fails with `NotFound`.
    pub async fn find(&self, id: ReportId) -> AppResult<Report> {
        self.report_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Report not found"))
    }

    async fn find_owned(&self, ctx: &RequestContext, id: ReportId) -> AppResult<Report> {
        let report = self.find(id).await?;
        if !report.is_owned_by(ctx.user_id) {
            return Err(AppError::forbidden("You do not have access to this report"));
        }
        Ok(report)
    }

    async fn tasks_for(&self, id: ReportId) -> AppResult<Vec<TaskDetails>> {
        let tasks = self.task_repo.find_by_report(id).await?;
        let volunteers = users_by_id(&self.user_repo, tasks.iter().map(|t| t.volunteer_id)).await?;
        Ok(tasks
            .into_iter()
            .map(|task| TaskDetails {
                volunteer: volunteers.get(&task.volunteer_id).cloned(),
                task,
            })
            .collect())
    }

    async fn with_tasks(&self, report: Report) -> AppResult<ReportDetails> {
        let tasks = self.tasks_for(report.id).await?;
        let mut details = self.with_reporter(report).await?;
        details.tasks = Some(tasks);
        Ok(details)
    }

    async fn with_reporter(&self, report: Report) -> AppResult<ReportDetails> {
        let reporter = self.user_repo.find_by_id(report.reporter_id).await?;
        Ok(ReportDetails {
            report,
            reporter,
            tasks: None,
        })
    }

    pub(crate) async fn with_reporters(&self, reports: Vec<Report>) -> AppResult<Vec<ReportDetails>> {
        let reporters: HashMap<UserId, User> =
            users_by_id(&self.user_repo, reports.iter().map(|r| r.reporter_id)).await?;
        Ok(reports
            .into_iter()
            .map(|report| ReportDetails {
                reporter: reporters.get(&report.reporter_id).cloned(),
                report,
                tasks: None,
            })
            .collect())
    }
}
