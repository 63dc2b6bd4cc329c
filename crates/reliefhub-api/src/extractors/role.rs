//! Role-gated variants of [`AuthUser`].
//!
//! Handlers list these first so the role check runs before any path, query
//! or body extractor gets a chance to reject the request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::{require_admin, require_volunteer};
use crate::state::AppState;

/// An authenticated caller holding the Admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

/// An authenticated caller holding the Volunteer role.
#[derive(Debug, Clone)]
pub struct VolunteerUser(pub AuthUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        require_admin(&auth)?;
        Ok(AdminUser(auth))
    }
}

impl FromRequestParts<AppState> for VolunteerUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        require_volunteer(&auth)?;
        Ok(VolunteerUser(auth))
    }
}
