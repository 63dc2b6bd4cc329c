//! Admin report triage: list, inspect, set status, assign volunteers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use reliefhub_core::error::AppError;
use reliefhub_core::types::ReportId;
use reliefhub_entity::report::ReportStatus;

use crate::dto::request::{AssignVolunteerRequest, UpdateStatusRequest, parse_filter};
use crate::dto::response::{ReportPageResponse, ReportResponse, TaskMessage};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, ApiJson, ApiPath, ApiQuery, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/reports
pub async fn list_reports(
    State(state): State<AppState>,
    _: AdminUser,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<Json<ReportPageResponse>> {
    let status = parse_filter::<ReportStatus>(params.status.as_deref())?;
    let page = state
        .report_service
        .list_all(status, params.page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/admin/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    _: AdminUser,
    ApiPath(id): ApiPath<ReportId>,
) -> ApiResult<Json<ReportResponse>> {
    let report = state.report_service.get(id).await?;
    Ok(Json(report.into()))
}

/// PATCH /api/admin/reports/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    ApiPath(id): ApiPath<ReportId>,
    ApiJson(req): ApiJson<UpdateStatusRequest>,
) -> ApiResult<Json<ReportResponse>> {
    let status: ReportStatus = req
        .status
        .as_deref()
        .ok_or_else(|| AppError::validation("Status field required"))?
        .parse()?;
    let report = state
        .report_service
        .set_status(auth.context(), id, status)
        .await?;
    Ok(Json(report.into()))
}

/// POST /api/admin/reports/{id}/assign
pub async fn assign_volunteer(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    ApiPath(id): ApiPath<ReportId>,
    ApiJson(req): ApiJson<AssignVolunteerRequest>,
) -> ApiResult<(StatusCode, Json<TaskMessage>)> {
    let task = state
        .task_service
        .assign(
            auth.context(),
            id,
            req.volunteer_id,
            req.task_description.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(TaskMessage {
            message: "Volunteer assigned successfully".to_string(),
            task: task.into(),
        }),
    ))
}
