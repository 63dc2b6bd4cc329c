//! Citizen handlers: file reports, follow their progress, read alerts.
//!
//! These routes only require a session. Ownership is enforced by the
//! report service.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use reliefhub_core::error::AppError;
use reliefhub_core::types::ReportId;

use crate::dto::request::{SubmitReportRequest, UpdateReportRequest};
use crate::dto::response::{
    AlertListResponse, CitizenDashboardResponse, ReportMessage, ReportPageResponse,
    ReportResponse, ReportStatusResponse,
};
use crate::error::ApiResult;
use crate::extractors::{ApiJson, ApiPath, ApiQuery, AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/citizen/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CitizenDashboardResponse>> {
    let dashboard = state.dashboard_service.citizen(auth.context()).await?;
    Ok(Json(dashboard.into()))
}

/// GET /api/citizen/reports
pub async fn list_reports(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<Json<ReportPageResponse>> {
    let page = state
        .report_service
        .page_own(auth.context(), params.page_request())
        .await?;
    Ok(Json(page.into()))
}

/// POST /api/citizen/reports
pub async fn submit_report(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<SubmitReportRequest>,
) -> ApiResult<(StatusCode, Json<ReportMessage>)> {
    req.validate().map_err(AppError::from)?;
    let report = state
        .report_service
        .submit(auth.context(), req.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ReportMessage {
            message: "Report submitted successfully".to_string(),
            report: report.into(),
        }),
    ))
}

/// GET /api/citizen/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<ReportId>,
) -> ApiResult<Json<ReportResponse>> {
    let report = state.report_service.get_own(auth.context(), id).await?;
    Ok(Json(report.into()))
}

/// PATCH /api/citizen/reports/{id}
pub async fn update_report(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<ReportId>,
    ApiJson(req): ApiJson<UpdateReportRequest>,
) -> ApiResult<Json<ReportResponse>> {
    let report = state
        .report_service
        .update_own(auth.context(), id, req.title, req.description, req.severity)
        .await?;
    Ok(Json(report.into()))
}

/// GET /api/citizen/reports/{id}/status
pub async fn report_status(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<ReportId>,
) -> ApiResult<Json<ReportStatusResponse>> {
    let view = state
        .report_service
        .status_of_own(auth.context(), id)
        .await?;
    Ok(Json(view.into()))
}

/// GET /api/citizen/alerts
pub async fn alerts(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<AlertListResponse>> {
    let alerts = state.alert_service.citizen_feed().await?;
    Ok(Json(alerts.into()))
}
