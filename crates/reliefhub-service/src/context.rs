//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};

use reliefhub_core::types::{SessionId, UserId};
use reliefhub_entity::session::Session;
use reliefhub_entity::user::{User, UserRole};

/// Context for the current authenticated request.
///
/// Produced by the HTTP authentication extractor and passed into service
/// methods so that every operation knows who is acting and from which
/// session.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The current session ID.
    pub session_id: SessionId,
    /// The user's role as loaded for this request.
    pub role: UserRole,
    /// The user's email.
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Builds a context from a validated session and its user.
    pub fn new(session: &Session, user: &User) -> Self {
        Self {
            user_id: user.id,
            session_id: session.id,
            role: user.role,
            email: user.email.clone(),
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
