//! Per-request access log.

use std::time::Instant;

use axum::extract::Request;
use axum::http::header::USER_AGENT;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info, warn};

/// Logs one line per request once the response is ready.
///
/// Health checks go to `debug` so they don't drown the access log. Client
/// errors are logged at `warn`; server faults are logged in full by the
/// fault middleware and only summarized here.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if path.ends_with("/health") {
        debug!(%method, %path, status, elapsed_ms, "Health check");
    } else if response.status().is_client_error() {
        warn!(%method, %path, status, elapsed_ms, %user_agent, "Request rejected");
    } else {
        info!(%method, %path, status, elapsed_ms, %user_agent, "Request handled");
    }

    response
}
