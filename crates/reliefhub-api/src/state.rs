//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use reliefhub_auth::session::SessionManager;
use reliefhub_core::config::AppConfig;
use reliefhub_database::DatabasePool;
use reliefhub_realtime::BroadcastHub;
use reliefhub_service::{
    AccountService, AlertService, Bootstrapper, DashboardService, ReportService,
    ResourceService, TaskService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,
    /// One-time migration and admin seeding
    pub bootstrapper: Arc<Bootstrapper>,
    /// In-process event hub
    pub hub: Arc<BroadcastHub>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session lifecycle manager
    pub sessions: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    pub account_service: Arc<AccountService>,
    pub report_service: Arc<ReportService>,
    pub task_service: Arc<TaskService>,
    pub resource_service: Arc<ResourceService>,
    pub alert_service: Arc<AlertService>,
    pub dashboard_service: Arc<DashboardService>,
}
