//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reliefhub_core::types::UserId;

use super::role::UserRole;

/// A registered account: citizen, volunteer or administrator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Login email, stored lowercase.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Free-text home location.
    pub location: Option<String>,
    /// User role (RBAC).
    pub role: UserRole,
    /// Deactivated accounts cannot log in or use existing sessions.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if this user is a volunteer.
    pub fn is_volunteer(&self) -> bool {
        self.role == UserRole::Volunteer
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    /// Email address; normalized to lowercase by the repository.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role: UserRole,
}
