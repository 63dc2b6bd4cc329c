//! Response DTOs.
//!
//! Shapes mirror the JSON the web front end already consumes: reports
//! embed the reporter, tasks embed the volunteer, lists carry a `total`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reliefhub_core::types::{Page, ReportId, TaskId, UserId};
use reliefhub_entity::alert::Alert;
use reliefhub_entity::report::{ReportStatus, Severity};
use reliefhub_entity::resource::Resource;
use reliefhub_entity::task::TaskStatus;
use reliefhub_entity::user::{User, UserRole};
use reliefhub_service::dashboard::{
    AdminDashboard, CitizenDashboard, DisasterStats, PublicStatistics, ResourceStats,
    VolunteerDashboard,
};
use reliefhub_service::{ReportDetails, ReportStatusView, TaskDetails};

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{message, user}` returned by signup and login.
#[derive(Debug, Clone, Serialize)]
pub struct UserMessage {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMessage {
    pub message: String,
    pub report: ReportResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskMessage {
    pub message: String,
    pub task: TaskResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceMessage {
    pub message: String,
    pub resource: Resource,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertMessage {
    pub message: String,
    pub alert: Alert,
}

/// Public view of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            location: user.location,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// A volunteer task with its volunteer embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: TaskId,
    pub volunteer: Option<UserResponse>,
    pub report_id: ReportId,
    pub task_description: String,
    pub status: TaskStatus,
    pub assigned_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl From<TaskDetails> for TaskResponse {
    fn from(details: TaskDetails) -> Self {
        let task = details.task;
        Self {
            id: task.id,
            volunteer: details.volunteer.map(UserResponse::from),
            report_id: task.report_id,
            task_description: task.task_description,
            status: task.status,
            assigned_at: task.assigned_at,
            started_at: task.started_at,
            completed_at: task.completed_at,
            notes: task.notes,
        }
    }
}

/// A disaster report with its reporter and, on detail views, its tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub id: ReportId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub severity: Severity,
    pub status: ReportStatus,
    pub reporter: Option<UserResponse>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer_tasks: Option<Vec<TaskResponse>>,
}

impl From<ReportDetails> for ReportResponse {
    fn from(details: ReportDetails) -> Self {
        let report = details.report;
        Self {
            id: report.id,
            title: report.title,
            description: report.description,
            location: report.location,
            latitude: report.latitude,
            longitude: report.longitude,
            severity: report.severity,
            status: report.status,
            reporter: details.reporter.map(UserResponse::from),
            image_url: report.image_url,
            created_at: report.created_at,
            updated_at: report.updated_at,
            resolved_at: report.resolved_at,
            volunteer_tasks: details
                .tasks
                .map(|tasks| tasks.into_iter().map(TaskResponse::from).collect()),
        }
    }
}

/// Citizen progress view of one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStatusResponse {
    pub report_id: ReportId,
    pub status: ReportStatus,
    pub title: String,
    pub assigned_volunteers: i64,
    pub last_update: DateTime<Utc>,
}

impl From<ReportStatusView> for ReportStatusResponse {
    fn from(view: ReportStatusView) -> Self {
        Self {
            report_id: view.report_id,
            status: view.status,
            title: view.title,
            assigned_volunteers: view.assigned_volunteers,
            last_update: view.last_update,
        }
    }
}

/// Paginated report list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPageResponse {
    pub reports: Vec<ReportResponse>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u64,
}

impl From<Page<ReportDetails>> for ReportPageResponse {
    fn from(page: Page<ReportDetails>) -> Self {
        let page = page.map(ReportResponse::from);
        Self {
            reports: page.items,
            total: page.total,
            pages: page.pages,
            current_page: page.current_page,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasterListResponse {
    pub disasters: Vec<ReportResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerListResponse {
    pub volunteers: Vec<UserResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceListResponse {
    pub resources: Vec<Resource>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertListResponse {
    pub alerts: Vec<Alert>,
    pub total: usize,
}

impl From<Vec<TaskDetails>> for TaskListResponse {
    fn from(tasks: Vec<TaskDetails>) -> Self {
        Self {
            total: tasks.len(),
            tasks: tasks.into_iter().map(TaskResponse::from).collect(),
        }
    }
}

impl From<Vec<Resource>> for ResourceListResponse {
    fn from(resources: Vec<Resource>) -> Self {
        Self {
            total: resources.len(),
            resources,
        }
    }
}

impl From<Vec<Alert>> for AlertListResponse {
    fn from(alerts: Vec<Alert>) -> Self {
        Self {
            total: alerts.len(),
            alerts,
        }
    }
}

/// Admin headline counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboardResponse {
    pub total_reports: i64,
    pub pending_reports: i64,
    pub active_volunteers: i64,
    pub total_resources: i64,
}

impl From<AdminDashboard> for AdminDashboardResponse {
    fn from(d: AdminDashboard) -> Self {
        Self {
            total_reports: d.total_reports,
            pending_reports: d.pending_reports,
            active_volunteers: d.active_volunteers,
            total_resources: d.total_resources,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitizenDashboardResponse {
    pub my_reports: Vec<ReportResponse>,
    pub active_disasters: Vec<ReportResponse>,
    pub recent_alerts: Vec<Alert>,
}

impl From<CitizenDashboard> for CitizenDashboardResponse {
    fn from(d: CitizenDashboard) -> Self {
        Self {
            my_reports: d.my_reports.into_iter().map(ReportResponse::from).collect(),
            active_disasters: d
                .active_disasters
                .into_iter()
                .map(ReportResponse::from)
                .collect(),
            recent_alerts: d.recent_alerts,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerDashboardResponse {
    pub total_tasks: i64,
    pub assigned: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub recent_tasks: Vec<TaskResponse>,
}

impl From<VolunteerDashboard> for VolunteerDashboardResponse {
    fn from(d: VolunteerDashboard) -> Self {
        Self {
            total_tasks: d.total_tasks,
            assigned: d.assigned,
            in_progress: d.in_progress,
            completed: d.completed,
            recent_tasks: d.recent_tasks.into_iter().map(TaskResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasterStatsResponse {
    pub total_reports: i64,
    pub active_reports: i64,
    pub resolved_reports: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceStatsResponse {
    pub total: i64,
    pub available: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsResponse {
    pub disaster_stats: DisasterStatsResponse,
    pub resource_stats: ResourceStatsResponse,
}

impl From<PublicStatistics> for StatisticsResponse {
    fn from(stats: PublicStatistics) -> Self {
        let DisasterStats {
            total_reports,
            active_reports,
            resolved_reports,
        } = stats.disaster_stats;
        let ResourceStats { total, available } = stats.resource_stats;
        Self {
            disaster_stats: DisasterStatsResponse {
                total_reports,
                active_reports,
                resolved_reports,
            },
            resource_stats: ResourceStatsResponse { total, available },
        }
    }
}

/// Liveness check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
