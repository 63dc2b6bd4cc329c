//! Auth handlers: signup, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{MessageResponse, UserMessage, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<UserMessage>)> {
    let user = state.account_service.signup(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserMessage {
            message: "User created successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<UserMessage>)> {
    let result = state
        .account_service
        .login(&req.email, &req.password)
        .await?;

    let session = &state.config.session;
    let cookie = Cookie::build((session.cookie_name.clone(), result.secret.expose().to_string()))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .secure(session.secure_cookie)
        .build();

    Ok((
        jar.add(cookie),
        Json(UserMessage {
            message: "Login successful".to_string(),
            user: result.user.into(),
        }),
    ))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    auth: AuthUser,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    state.account_service.logout(auth.context()).await?;

    let removal = Cookie::build(state.config.session.cookie_name.clone())
        .path("/")
        .build();

    Ok((
        jar.remove(removal),
        Json(MessageResponse::new("Logged out successfully")),
    ))
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserResponse>> {
    let user = state.account_service.current_user(auth.context()).await?;
    Ok(Json(user.into()))
}
