//! Unauthenticated read-only endpoints.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{PublicAlertsQuery, PublicResourcesQuery};
use crate::dto::response::{
    AlertListResponse, DisasterListResponse, ReportResponse, ResourceListResponse,
    StatisticsResponse,
};
use crate::error::ApiResult;
use crate::extractors::ApiQuery;
use crate::state::AppState;

/// GET /api/public/disasters
pub async fn disasters(State(state): State<AppState>) -> ApiResult<Json<DisasterListResponse>> {
    let disasters: Vec<ReportResponse> = state
        .report_service
        .list_active(None)
        .await?
        .into_iter()
        .map(ReportResponse::from)
        .collect();
    Ok(Json(DisasterListResponse {
        total: disasters.len(),
        disasters,
    }))
}

/// GET /api/public/alerts
pub async fn alerts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PublicAlertsQuery>,
) -> ApiResult<Json<AlertListResponse>> {
    let alerts = state.alert_service.public_feed(query.limit).await?;
    Ok(Json(alerts.into()))
}

/// GET /api/public/resources
pub async fn resources(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PublicResourcesQuery>,
) -> ApiResult<Json<ResourceListResponse>> {
    let resource_type = query
        .resource_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let resources = state.resource_service.list_available(resource_type).await?;
    Ok(Json(resources.into()))
}

/// GET /api/public/statistics
pub async fn statistics(State(state): State<AppState>) -> ApiResult<Json<StatisticsResponse>> {
    let stats = state.dashboard_service.public_statistics().await?;
    Ok(Json(stats.into()))
}
