//! HTTP handlers grouped by audience.

pub mod admin;
pub mod auth;
pub mod citizen;
pub mod health;
pub mod public;
pub mod volunteer;

use axum::Json;
use axum::http::StatusCode;

use crate::error::ApiErrorResponse;

/// Fallback for unmatched routes.
pub async fn not_found() -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse {
            error: "Resource not found".to_string(),
        }),
    )
}
