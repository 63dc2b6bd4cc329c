//! Role capability gates.
//!
//! Handlers call these at the top of their body after authentication has
//! succeeded; a role mismatch is `Forbidden`.

use reliefhub_core::error::AppError;
use reliefhub_entity::user::UserRole;

/// A privilege tied to a single role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Report triage, volunteer assignment, resources and alerts.
    Admin,
    /// Working assigned tasks.
    Volunteer,
}

impl Capability {
    /// The role that holds this capability.
    pub fn role(&self) -> UserRole {
        match self {
            Self::Admin => UserRole::Admin,
            Self::Volunteer => UserRole::Volunteer,
        }
    }

    /// Checks whether `role` holds this capability.
    pub fn check(&self, role: UserRole) -> Result<(), AppError> {
        if role == self.role() {
            Ok(())
        } else {
            Err(AppError::forbidden(match self {
                Self::Admin => "Admin access required",
                Self::Volunteer => "Volunteer access required",
            }))
        }
    }
}

/// Require the admin role.
pub fn require_admin(role: UserRole) -> Result<(), AppError> {
    Capability::Admin.check(role)
}

/// Require the volunteer role.
pub fn require_volunteer(role: UserRole) -> Result<(), AppError> {
    Capability::Volunteer.check(role)
}
