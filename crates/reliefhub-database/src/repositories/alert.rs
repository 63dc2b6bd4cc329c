//! Alert repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_entity::alert::{Alert, CreateAlert};

/// Repository for alert records.
#[derive(Debug, Clone)]
pub struct AlertRepository {
    pool: SqlitePool,
}

impl AlertRepository {
    /// Create a new alert repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The latest `limit` alerts, newest first.
    pub async fn find_recent(&self, limit: i64, broadcast_only: bool) -> AppResult<Vec<Alert>> {
        let sql = if broadcast_only {
            "SELECT * FROM alerts WHERE is_broadcast = 1 ORDER BY created_at DESC, id DESC LIMIT ?"
        } else {
            "SELECT * FROM alerts ORDER BY created_at DESC, id DESC LIMIT ?"
        };
        sqlx::query_as::<_, Alert>(sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list alerts", e))
    }

    /// Store a new alert.
    pub async fn create(&self, data: &CreateAlert) -> AppResult<Alert> {
        sqlx::query_as::<_, Alert>(
            "INSERT INTO alerts (title, message, alert_level, report_id, target_role, is_broadcast, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.message)
        .bind(data.alert_level)
        .bind(data.report_id)
        .bind(data.target_role)
        .bind(data.is_broadcast)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create alert", e))
    }
}
