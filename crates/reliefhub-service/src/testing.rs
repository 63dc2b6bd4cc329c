//! Shared fixtures for service tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use reliefhub_auth::password::PasswordHasher;
use reliefhub_auth::session::SessionManager;
use reliefhub_core::config::auth::AuthConfig;
use reliefhub_core::config::session::SessionConfig;
use reliefhub_core::error::AppError;
use reliefhub_core::events::DomainEvent;
use reliefhub_core::result::AppResult;
use reliefhub_core::traits::EventPublisher;
use reliefhub_database::DatabasePool;
use reliefhub_database::repositories::{
    AlertRepository, ReportRepository, ResourceRepository, SessionRepository, TaskRepository,
    UserRepository,
};
use reliefhub_entity::user::{CreateUser, UserRole};

use crate::context::RequestContext;
use crate::{
    AccountService, AlertService, DashboardService, ReportService, ResourceService, TaskService,
};

pub(crate) const PASSWORD: &str = "Pw123!";

/// Records event names instead of delivering them.
#[derive(Debug, Default)]
pub(crate) struct RecordingPublisher {
    fail: bool,
    names: Mutex<Vec<&'static str>>,
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: DomainEvent) -> AppResult<usize> {
        if self.fail {
            return Err(AppError::service_unavailable("no broker"));
        }
        self.names.lock().await.push(event.name());
        Ok(1)
    }
}

/// Every service wired to one in-memory database.
pub(crate) struct TestServices {
    pub users: Arc<UserRepository>,
    pub accounts: AccountService,
    pub reports: Arc<ReportService>,
    pub tasks: Arc<TaskService>,
    pub resources: ResourceService,
    pub alerts: AlertService,
    pub dashboards: DashboardService,
    publisher: Arc<RecordingPublisher>,
}

impl TestServices {
    pub async fn new() -> Self {
        Self::build(false).await
    }

    /// Services whose publisher rejects every event.
    pub async fn with_failing_publisher() -> Self {
        Self::build(true).await
    }

    async fn build(fail: bool) -> Self {
        let db = DatabasePool::in_memory().await.unwrap();
        let pool = db.pool().clone();
        let users = Arc::new(UserRepository::new(pool.clone()));
        let report_repo = Arc::new(ReportRepository::new(pool.clone()));
        let task_repo = Arc::new(TaskRepository::new(pool.clone()));
        let resource_repo = Arc::new(ResourceRepository::new(pool.clone()));
        let alert_repo = Arc::new(AlertRepository::new(pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(pool));

        let publisher = Arc::new(RecordingPublisher {
            fail,
            ..Default::default()
        });
        let events: Arc<dyn EventPublisher> = publisher.clone();

        let sessions = Arc::new(SessionManager::new(
            users.clone(),
            session_repo,
            SessionConfig::default(),
        ));
        let accounts = AccountService::new(users.clone(), sessions, AuthConfig::default());
        let reports = Arc::new(ReportService::new(
            report_repo.clone(),
            task_repo.clone(),
            users.clone(),
            events.clone(),
        ));
        let tasks = Arc::new(TaskService::new(
            task_repo.clone(),
            report_repo.clone(),
            users.clone(),
            events.clone(),
        ));
        let resources = ResourceService::new(resource_repo.clone());
        let alerts = AlertService::new(alert_repo.clone(), report_repo.clone(), events);
        let dashboards = DashboardService::new(
            report_repo,
            task_repo,
            users.clone(),
            resource_repo,
            alert_repo,
            reports.clone(),
            tasks.clone(),
        );

        Self {
            users,
            accounts,
            reports,
            tasks,
            resources,
            alerts,
            dashboards,
            publisher,
        }
    }

    /// Names of every event published so far.
    pub async fn published(&self) -> Vec<&'static str> {
        self.publisher.names.lock().await.clone()
    }

    pub async fn admin(&self) -> RequestContext {
        self.login_as("admin@x.com", UserRole::Admin).await
    }

    pub async fn citizen(&self, email: &str) -> RequestContext {
        self.login_as(email, UserRole::Citizen).await
    }

    pub async fn volunteer(&self, email: &str) -> RequestContext {
        self.login_as(email, UserRole::Volunteer).await
    }

    async fn login_as(&self, email: &str, role: UserRole) -> RequestContext {
        if self.users.find_by_email(email).await.unwrap().is_none() {
            self.users
                .create(&CreateUser {
                    name: email.split('@').next().unwrap_or("user").to_string(),
                    email: email.to_string(),
                    password_hash: PasswordHasher::new().hash(PASSWORD).unwrap(),
                    phone: None,
                    location: None,
                    role,
                })
                .await
                .unwrap();
        }
        let login = self.accounts.login(email, PASSWORD).await.unwrap();
        RequestContext::new(&login.session, &login.user)
    }
}
