//! Initialization gate.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::state::AppState;

/// Awaits the one-time bootstrap before letting the request through.
pub async fn bootstrap_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Err(err) = state.bootstrapper.ensure().await {
        return ApiError(err).into_response();
    }
    next.run(request).await
}
