//! Session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reliefhub_core::types::{SessionId, UserId};

/// A server-side login session.
///
/// Sessions are created on login and destroyed on logout or expiry. The
/// bearer secret itself is never stored, only its SHA-256 hash.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: SessionId,
    /// The user this session belongs to.
    pub user_id: UserId,
    /// SHA-256 hash of the session secret.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// Last authenticated request.
    pub last_activity: DateTime<Utc>,
    /// When the session expires regardless of activity.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the absolute lifetime has run out.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Check whether the session has sat idle for at least `idle`.
    pub fn is_idle_at(&self, now: DateTime<Utc>, idle: Duration) -> bool {
        now - self.last_activity >= idle
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub user_id: UserId,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}
