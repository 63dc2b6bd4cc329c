//! Read-only aggregates for the admin, citizen and volunteer home views
//! and the anonymous statistics endpoint.

use std::sync::Arc;

use reliefhub_core::result::AppResult;
use reliefhub_database::repositories::{
    AlertRepository, ReportRepository, ResourceRepository, TaskRepository, UserRepository,
};
use reliefhub_entity::alert::Alert;
use reliefhub_entity::report::ReportStatus;
use reliefhub_entity::resource::Availability;
use reliefhub_entity::user::{User, UserRole};

use crate::context::RequestContext;
use crate::report::{ReportDetails, ReportService};
use crate::task::{TaskDetails, TaskService};

const CITIZEN_ACTIVE_LIMIT: i64 = 10;
const CITIZEN_ALERT_LIMIT: i64 = 5;
const VOLUNTEER_RECENT_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminDashboard {
    pub total_reports: i64,
    pub pending_reports: i64,
    /// Every volunteer account, deactivated ones included.
    pub active_volunteers: i64,
    pub total_resources: i64,
}

#[derive(Debug, Clone)]
pub struct CitizenDashboard {
    pub my_reports: Vec<ReportDetails>,
    pub active_disasters: Vec<ReportDetails>,
    pub recent_alerts: Vec<Alert>,
}

#[derive(Debug, Clone)]
pub struct VolunteerDashboard {
    pub total_tasks: i64,
    pub assigned: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub recent_tasks: Vec<TaskDetails>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisasterStats {
    pub total_reports: i64,
    pub active_reports: i64,
    pub resolved_reports: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceStats {
    pub total: i64,
    pub available: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicStatistics {
    pub disaster_stats: DisasterStats,
    pub resource_stats: ResourceStats,
}

/// Builds dashboard aggregates.
#[derive(Debug, Clone)]
pub struct DashboardService {
    report_repo: Arc<ReportRepository>,
    task_repo: Arc<TaskRepository>,
    user_repo: Arc<UserRepository>,
    resource_repo: Arc<ResourceRepository>,
    alert_repo: Arc<AlertRepository>,
    reports: Arc<ReportService>,
    tasks: Arc<TaskService>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        report_repo: Arc<ReportRepository>,
        task_repo: Arc<TaskRepository>,
        user_repo: Arc<UserRepository>,
        resource_repo: Arc<ResourceRepository>,
        alert_repo: Arc<AlertRepository>,
        reports: Arc<ReportService>,
        tasks: Arc<TaskService>,
    ) -> Self {
        Self {
            report_repo,
            task_repo,
            user_repo,
            resource_repo,
            alert_repo,
            reports,
            tasks,
        }
    }

    pub async fn admin(&self) -> AppResult<AdminDashboard> {
        Ok(AdminDashboard {
            total_reports: self.report_repo.count(None).await?,
            pending_reports: self.report_repo.count(Some(ReportStatus::Pending)).await?,
            active_volunteers: self
                .user_repo
                .count_by_role(UserRole::Volunteer)
                .await?,
            total_resources: self.resource_repo.count(None).await?,
        })
    }

    pub async fn citizen(&self, ctx: &RequestContext) -> AppResult<CitizenDashboard> {
        let my_reports = self.reports.list_own(ctx).await?;
        let active_disasters = self.reports.list_active(Some(CITIZEN_ACTIVE_LIMIT)).await?;
        let recent_alerts = self
            .alert_repo
            .find_recent(CITIZEN_ALERT_LIMIT, false)
            .await?;
        Ok(CitizenDashboard {
            my_reports,
            active_disasters,
            recent_alerts,
        })
    }

    pub async fn volunteer(&self, ctx: &RequestContext) -> AppResult<VolunteerDashboard> {
        let counts = self.task_repo.count_by_volunteer(ctx.user_id).await?;
        let recent = self
            .task_repo
            .find_by_volunteer(ctx.user_id, None, Some(VOLUNTEER_RECENT_LIMIT))
            .await?;
        Ok(VolunteerDashboard {
            total_tasks: counts.total(),
            assigned: counts.assigned,
            in_progress: counts.in_progress,
            completed: counts.completed,
            recent_tasks: self.tasks.with_volunteers(recent).await?,
        })
    }

    /// Every volunteer account, active or not.
    pub async fn volunteers(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_by_role(Some(UserRole::Volunteer)).await
    }

    pub async fn public_statistics(&self) -> AppResult<PublicStatistics> {
        let mut active_reports = 0;
        for status in ReportStatus::ACTIVE {
            active_reports += self.report_repo.count(Some(status)).await?;
        }
        Ok(PublicStatistics {
            disaster_stats: DisasterStats {
                total_reports: self.report_repo.count(None).await?,
                active_reports,
                resolved_reports: self.report_repo.count(Some(ReportStatus::Resolved)).await?,
            },
            resource_stats: ResourceStats {
                total: self.resource_repo.count(None).await?,
                available: self
                    .resource_repo
                    .count(Some(Availability::Available))
                    .await?,
            },
        })
    }
}
