//! Admin dashboard.

use axum::Json;
use axum::extract::State;

use crate::dto::response::AdminDashboardResponse;
use crate::error::ApiResult;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    _: AdminUser,
) -> ApiResult<Json<AdminDashboardResponse>> {
    let stats = state.dashboard_service.admin().await?;
    Ok(Json(stats.into()))
}
