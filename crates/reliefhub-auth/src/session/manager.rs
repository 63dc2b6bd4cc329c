//! Session lifecycle manager: login, validation, logout and purge.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use reliefhub_core::config::session::SessionConfig;
use reliefhub_core::error::AppError;
use reliefhub_core::result::AppResult;
use reliefhub_core::types::SessionId;
use reliefhub_database::repositories::{SessionRepository, UserRepository};
use reliefhub_entity::session::{CreateSession, Session};
use reliefhub_entity::user::User;

use crate::password::PasswordHasher;

use super::token::SessionSecret;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// Created session row.
    pub session: Session,
    /// Secret to hand to the client; not recoverable later.
    pub secret: SessionSecret,
}

/// Manages the complete session lifecycle.
#[derive(Debug, Clone)]
pub struct SessionManager {
    user_repo: Arc<UserRepository>,
    session_repo: Arc<SessionRepository>,
    hasher: PasswordHasher,
    config: SessionConfig,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        user_repo: Arc<UserRepository>,
        session_repo: Arc<SessionRepository>,
        config: SessionConfig,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            hasher: PasswordHasher::new(),
            config,
        }
    }

    /// Session configuration in effect.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn idle_timeout(&self) -> Duration {
        Duration::minutes(self.config.idle_timeout_minutes as i64)
    }

    fn absolute_timeout(&self) -> Duration {
        Duration::hours(self.config.absolute_timeout_hours as i64)
    }

    /// Verifies credentials and opens a session.
    ///
    /// The password is checked before the active flag, so an inactive
    /// account is only revealed to someone who knows its password.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!(email = %email, "Login attempt for unknown email");
                return Err(AppError::unauthorized(INVALID_CREDENTIALS));
            }
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        if !user.is_active {
            warn!(user_id = %user.id, "Login refused: account inactive");
            return Err(AppError::forbidden("Account is inactive"));
        }

        let now = Utc::now();
        let purged = self
            .session_repo
            .delete_expired(Some(user.id), now, now - self.idle_timeout())
            .await?;
        if purged > 0 {
            debug!(user_id = %user.id, purged, "Purged expired sessions");
        }

        let secret = SessionSecret::generate();
        let session = self
            .session_repo
            .create(&CreateSession {
                user_id: user.id,
                token_hash: secret.hash(),
                expires_at: now + self.absolute_timeout(),
            })
            .await?;

        info!(user_id = %user.id, session_id = %session.id, role = %user.role, "Login successful");
        Ok(LoginResult {
            user,
            session,
            secret,
        })
    }

    /// Resolves a presented secret to its live session and active user,
    /// refreshing the session's last activity.
    pub async fn authenticate(&self, secret: &str) -> AppResult<(Session, User)> {
        let hash = SessionSecret::from_client(secret).hash();
        let session = self
            .session_repo
            .find_by_token_hash(&hash)
            .await?
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let now = Utc::now();
        if self.is_stale(&session, now) {
            self.session_repo.delete(session.id).await?;
            debug!(session_id = %session.id, "Session expired");
            return Err(AppError::unauthorized("Session expired"));
        }

        let user = match self.user_repo.find_by_id(session.user_id).await? {
            Some(user) if user.is_active => user,
            _ => {
                warn!(session_id = %session.id, user_id = %session.user_id, "Session owner missing or inactive");
                return Err(AppError::unauthorized("Authentication required"));
            }
        };

        self.session_repo.touch(session.id, now).await?;
        Ok((
            Session {
                last_activity: now,
                ..session
            },
            user,
        ))
    }

    /// Closes a session.
    pub async fn logout(&self, session_id: SessionId) -> AppResult<()> {
        self.session_repo.delete(session_id).await?;
        info!(session_id = %session_id, "Logout");
        Ok(())
    }

    /// Deletes every expired or idle session. Returns how many were removed.
    pub async fn purge_expired(&self) -> AppResult<u64> {
        let now = Utc::now();
        let removed = self
            .session_repo
            .delete_expired(None, now, now - self.idle_timeout())
            .await?;
        info!(removed, "Purged expired sessions");
        Ok(removed)
    }

    fn is_stale(&self, session: &Session, now: DateTime<Utc>) -> bool {
        session.is_expired_at(now) || session.is_idle_at(now, self.idle_timeout())
    }
}
