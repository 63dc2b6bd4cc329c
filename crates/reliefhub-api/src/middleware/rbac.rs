//! Role guards behind the `AdminUser` and `VolunteerUser` extractors.

use crate::error::ApiResult;
use crate::extractors::AuthUser;

/// Checks that the authenticated user has the Admin role.
pub fn require_admin(auth: &AuthUser) -> ApiResult<()> {
    reliefhub_auth::require_admin(auth.role)?;
    Ok(())
}

/// Checks that the authenticated user has the Volunteer role.
pub fn require_volunteer(auth: &AuthUser) -> ApiResult<()> {
    reliefhub_auth::require_volunteer(auth.role)?;
    Ok(())
}
