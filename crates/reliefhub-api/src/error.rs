//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use reliefhub_core::error::{AppError, ErrorKind};

/// Generic body for every server-side fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// Server fault details attached to a 500 response as an extension.
///
/// The fault logging middleware picks this up to log the cause and, in
/// debug mode, expose it to the client.
#[derive(Debug, Clone)]
pub struct Fault {
    pub exception: String,
    pub trace: Vec<String>,
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Handler result type.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if !self.0.kind.is_server_error() {
            let body = ApiErrorResponse {
                error: self.0.message.clone(),
            };
            return (status, Json(body)).into_response();
        }

        let body = ApiErrorResponse {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        };
        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(Fault {
            exception: self.0.to_string(),
            trace: self.0.chain(),
        });
        response
    }
}
