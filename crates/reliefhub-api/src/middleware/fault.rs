//! Server fault logging.
//!
//! Handlers never log their own 500s. The error mapping attaches a
//! [`Fault`] extension instead, and this layer records it together with
//! the request that caused it.

use axum::Json;
use axum::extract::{Request, State};
use axum::http::header::USER_AGENT;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::error::{Fault, INTERNAL_ERROR_MESSAGE};
use crate::state::AppState;

/// Body returned for faults when `server.debug` is on.
#[derive(Debug, Serialize)]
struct DebugFaultBody<'a> {
    error: &'a str,
    exception: &'a str,
    trace: &'a [String],
}

/// Logs every tagged server fault and, in debug mode, exposes it.
pub async fn fault_logging(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    let Some(fault) = response.extensions().get::<Fault>().cloned() else {
        return response;
    };

    error!(
        method = %method,
        path = %path,
        query = %query,
        user_agent = %user_agent,
        exception = %fault.exception,
        trace = ?fault.trace,
        "Unhandled server fault"
    );

    if !state.config.server.debug {
        return response;
    }

    let status = response.status();
    let body = DebugFaultBody {
        error: INTERNAL_ERROR_MESSAGE,
        exception: &fault.exception,
        trace: &fault.trace,
    };
    (status, Json(body)).into_response()
}
