//! Application builder: wires repositories, services and state into an
//! Axum app and serves it.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use reliefhub_auth::session::SessionManager;
use reliefhub_core::config::AppConfig;
use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::traits::EventPublisher;
use reliefhub_database::DatabasePool;
use reliefhub_database::repositories::{
    AlertRepository, ReportRepository, ResourceRepository, SessionRepository, TaskRepository,
    UserRepository,
};
use reliefhub_realtime::BroadcastHub;
use reliefhub_service::{
    AccountService, AlertService, Bootstrapper, DashboardService, ReportService,
    ResourceService, TaskService,
};

use crate::router::build_router;
use crate::state::AppState;

/// Constructs every repository and service over one database pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    let pool = db.pool().clone();

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(pool.clone()));
    let report_repo = Arc::new(ReportRepository::new(pool.clone()));
    let task_repo = Arc::new(TaskRepository::new(pool.clone()));
    let resource_repo = Arc::new(ResourceRepository::new(pool.clone()));
    let alert_repo = Arc::new(AlertRepository::new(pool));

    // ── Infrastructure ───────────────────────────────────────────
    let hub = Arc::new(BroadcastHub::from_config(&config.realtime));
    let events: Arc<dyn EventPublisher> = hub.clone();
    let bootstrapper = Arc::new(Bootstrapper::new(
        db.clone(),
        user_repo.clone(),
        config.bootstrap.clone(),
    ));

    // ── Auth ─────────────────────────────────────────────────────
    let sessions = Arc::new(SessionManager::new(
        user_repo.clone(),
        session_repo,
        config.session.clone(),
    ));

    // ── Services ─────────────────────────────────────────────────
    let account_service = Arc::new(AccountService::new(
        user_repo.clone(),
        sessions.clone(),
        config.auth.clone(),
    ));
    let report_service = Arc::new(ReportService::new(
        report_repo.clone(),
        task_repo.clone(),
        user_repo.clone(),
        events.clone(),
    ));
    let task_service = Arc::new(TaskService::new(
        task_repo.clone(),
        report_repo.clone(),
        user_repo.clone(),
        events.clone(),
    ));
    let resource_service = Arc::new(ResourceService::new(resource_repo.clone()));
    let alert_service = Arc::new(AlertService::new(
        alert_repo.clone(),
        report_repo.clone(),
        events,
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        report_repo,
        task_repo,
        user_repo,
        resource_repo,
        alert_repo,
        report_service.clone(),
        task_service.clone(),
    ));

    AppState {
        config: Arc::new(config),
        db,
        bootstrapper,
        hub,
        sessions,
        account_service,
        report_service,
        task_service,
        resource_service,
        alert_service,
        dashboard_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the ReliefHub server until Ctrl-C.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    info!("Starting ReliefHub server...");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = build_state(config, db.clone());

    // Bootstrap eagerly so the first request does not pay for it.
    state.bootstrapper.ensure().await?;

    let app = build_app(state);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e))?;
    info!(addr = %addr, "ReliefHub listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, closing database pool");
    if tokio::time::timeout(grace, db.close()).await.is_err() {
        warn!(grace_seconds = grace.as_secs(), "Database pool did not close in time");
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
