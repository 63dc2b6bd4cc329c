//! Session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_core::types::{SessionId, UserId};
use reliefhub_entity::session::{CreateSession, Session};

/// Repository for login session storage.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a session by token hash.
    pub async fn find_by_token_hash(&self, token_hash: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find session by token", e)
            })
    }

    /// Count sessions of one user.
    pub async fn count_by_user(&self, user_id: UserId) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sessions WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count sessions", e))
    }

    /// Create a new session.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        let now = Utc::now();
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (id, user_id, token_hash, created_at, last_activity, expires_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(SessionId::new())
        .bind(data.user_id)
        .bind(&data.token_hash)
        .bind(now)
        .bind(now)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Update last activity timestamp.
    pub async fn touch(&self, id: SessionId, at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET last_activity = ? WHERE id = ?")
            .bind(at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last activity", e)
            })?;
        Ok(())
    }

    /// Delete a session.
    pub async fn delete(&self, id: SessionId) -> AppResult<()> {
        sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete session", e))?;
        Ok(())
    }

    /// Delete sessions that are past their absolute expiry or were last
    /// used before `idle_cutoff`. Restricted to one user when given.
    pub async fn delete_expired(
        &self,
        user_id: Option<UserId>,
        now: DateTime<Utc>,
        idle_cutoff: DateTime<Utc>,
    ) -> AppResult<u64> {
        let query = match user_id {
            Some(user_id) => sqlx::query(
                "DELETE FROM sessions WHERE user_id = ? AND (expires_at <= ? OR last_activity <= ?)",
            )
            .bind(user_id),
            None => sqlx::query("DELETE FROM sessions WHERE expires_at <= ? OR last_activity <= ?"),
        };
        let result = query
            .bind(now)
            .bind(idle_cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge expired sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
