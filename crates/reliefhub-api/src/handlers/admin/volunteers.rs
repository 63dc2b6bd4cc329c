//! Volunteer roster.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{UserResponse, VolunteerListResponse};
use crate::error::ApiResult;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/admin/volunteers
pub async fn list_volunteers(
    State(state): State<AppState>,
    _: AdminUser,
) -> ApiResult<Json<VolunteerListResponse>> {
    let volunteers: Vec<UserResponse> = state
        .dashboard_service
        .volunteers()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Ok(Json(VolunteerListResponse {
        total: volunteers.len(),
        volunteers,
    }))
}
