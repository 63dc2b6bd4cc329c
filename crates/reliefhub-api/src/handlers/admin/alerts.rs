//! Alert issue and review.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::CreateAlertRequest;
use crate::dto::response::{AlertListResponse, AlertMessage};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, ApiJson};
use crate::state::AppState;

/// GET /api/admin/alerts
pub async fn list_alerts(
    State(state): State<AppState>,
    _: AdminUser,
) -> ApiResult<Json<AlertListResponse>> {
    let alerts = state.alert_service.admin_feed().await?;
    Ok(Json(alerts.into()))
}

/// POST /api/admin/alerts
pub async fn create_alert(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    ApiJson(req): ApiJson<CreateAlertRequest>,
) -> ApiResult<(StatusCode, Json<AlertMessage>)> {
    let alert = state
        .alert_service
        .create(auth.context(), req.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AlertMessage {
            message: "Alert created successfully".to_string(),
            alert,
        }),
    ))
}
