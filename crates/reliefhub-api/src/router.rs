//! Route definitions for the ReliefHub HTTP API.
//!
//! All routes are organized by audience and mounted under `/api`. Every
//! route except the health check waits for the one-time bootstrap.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, patch, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    let gated = Router::new()
        .merge(auth_routes())
        .merge(admin_routes())
        .merge(citizen_routes())
        .merge(volunteer_routes())
        .merge(public_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::bootstrap::bootstrap_gate,
        ));

    let api_routes = Router::new()
        .merge(gated)
        .route("/health", get(handlers::health::health));

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::fault::fault_logging,
        ))
        .layer(CatchPanicLayer::custom(middleware::panic::handle_panic))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Auth endpoints: signup, login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Admin triage, registry and alert endpoints
fn admin_routes() -> Router<AppState> {
    use handlers::admin::{alerts, dashboard, reports, resources, volunteers};

    Router::new()
        .route("/admin/dashboard", get(dashboard::dashboard))
        .route("/admin/reports", get(reports::list_reports))
        .route("/admin/reports/{id}", get(reports::get_report))
        .route("/admin/reports/{id}/status", patch(reports::update_status))
        .route("/admin/reports/{id}/assign", post(reports::assign_volunteer))
        .route("/admin/volunteers", get(volunteers::list_volunteers))
        .route(
            "/admin/resources",
            get(resources::list_resources).post(resources::create_resource),
        )
        .route(
            "/admin/resources/{id}",
            get(resources::get_resource)
                .patch(resources::update_resource)
                .delete(resources::delete_resource),
        )
        .route(
            "/admin/alerts",
            get(alerts::list_alerts).post(alerts::create_alert),
        )
}

/// Citizen report and alert endpoints
fn citizen_routes() -> Router<AppState> {
    use handlers::citizen;

    Router::new()
        .route("/citizen/dashboard", get(citizen::dashboard))
        .route(
            "/citizen/reports",
            get(citizen::list_reports).post(citizen::submit_report),
        )
        .route(
            "/citizen/reports/{id}",
            get(citizen::get_report).patch(citizen::update_report),
        )
        .route("/citizen/reports/{id}/status", get(citizen::report_status))
        .route("/citizen/alerts", get(citizen::alerts))
}

/// Volunteer task endpoints
fn volunteer_routes() -> Router<AppState> {
    use handlers::volunteer;

    Router::new()
        .route("/volunteer/dashboard", get(volunteer::dashboard))
        .route("/volunteer/tasks", get(volunteer::list_tasks))
        .route(
            "/volunteer/tasks/{id}",
            get(volunteer::get_task).patch(volunteer::update_task),
        )
        .route("/volunteer/tasks/{id}/start", post(volunteer::start_task))
        .route(
            "/volunteer/tasks/{id}/complete",
            post(volunteer::complete_task),
        )
}

/// Unauthenticated read-only endpoints
fn public_routes() -> Router<AppState> {
    use handlers::public;

    Router::new()
        .route("/public/disasters", get(public::disasters))
        .route("/public/alerts", get(public::alerts))
        .route("/public/resources", get(public::resources))
        .route("/public/statistics", get(public::statistics))
}
