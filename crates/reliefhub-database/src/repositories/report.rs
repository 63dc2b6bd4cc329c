//! Disaster report repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_core::types::{Page, PageRequest, ReportId, UserId};
use reliefhub_entity::report::{CreateReport, Report, ReportStatus};

/// Repository for disaster report CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a report by primary key.
    pub async fn find_by_id(&self, id: ReportId) -> AppResult<Option<Report>> {
        sqlx::query_as::<_, Report>("SELECT * FROM disaster_reports WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find report", e))
    }

    /// All reports filed by one citizen, newest first.
    pub async fn find_by_reporter(&self, reporter_id: UserId) -> AppResult<Vec<Report>> {
        sqlx::query_as::<_, Report>(
            "SELECT * FROM disaster_reports WHERE reporter_id = ? \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(reporter_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reports by reporter", e)
        })
    }

    /// Page through all reports, optionally filtered by status, newest first.
    pub async fn find_page(
        &self,
        status: Option<ReportStatus>,
        page: PageRequest,
    ) -> AppResult<Page<Report>> {
        let total = self.count(status).await?;

        let query = match status {
            Some(status) => sqlx::query_as::<_, Report>(
                "SELECT * FROM disaster_reports WHERE status = ? \
                 ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
            )
            .bind(status),
            None => sqlx::query_as::<_, Report>(
                "SELECT * FROM disaster_reports \
                 ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
            ),
        };
        let reports = query
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reports", e))?;

        Ok(Page::new(reports, page, total as u64))
    }

    /// Page through one reporter's reports, newest first.
    pub async fn find_page_by_reporter(
        &self,
        reporter_id: UserId,
        page: PageRequest,
    ) -> AppResult<Page<Report>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM disaster_reports WHERE reporter_id = ?",
        )
        .bind(reporter_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count reports", e))?;

        let reports = sqlx::query_as::<_, Report>(
            "SELECT * FROM disaster_reports WHERE reporter_id = ? \
             ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
        )
        .bind(reporter_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reports by reporter", e)
        })?;

        Ok(Page::new(reports, page, total as u64))
    }

    /// Reports whose status is one of `statuses`, newest first.
    pub async fn find_by_statuses(
        &self,
        statuses: &[ReportStatus],
        limit: Option<i64>,
    ) -> AppResult<Vec<Report>> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }
        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT * FROM disaster_reports WHERE status IN (");
        let mut separated = qb.separated(", ");
        for status in statuses {
            separated.push_bind(*status);
        }
        separated.push_unseparated(") ORDER BY created_at DESC, id DESC");
        if let Some(limit) = limit {
            qb.push(" LIMIT ").push_bind(limit);
        }

        qb.build_query_as::<Report>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list reports by status", e)
            })
    }

    /// Count reports, optionally restricted to one status.
    pub async fn count(&self, status: Option<ReportStatus>) -> AppResult<i64> {
        let query = match status {
            Some(status) => sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM disaster_reports WHERE status = ?",
            )
            .bind(status),
            None => sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM disaster_reports"),
        };
        query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count reports", e))
    }

    /// File a new report in `pending`.
    pub async fn create(&self, data: &CreateReport) -> AppResult<Report> {
        let now = Utc::now();
        sqlx::query_as::<_, Report>(
            "INSERT INTO disaster_reports \
             (title, description, location, latitude, longitude, severity, status, reporter_id, image_url, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.location)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.severity)
        .bind(ReportStatus::Pending)
        .bind(data.reporter_id)
        .bind(&data.image_url)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create report", e))
    }

    /// Persist the citizen-editable fields of a report.
    pub async fn update_content(&self, report: &Report) -> AppResult<Report> {
        sqlx::query_as::<_, Report>(
            "UPDATE disaster_reports SET title = ?, description = ?, severity = ?, updated_at = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(&report.title)
        .bind(&report.description)
        .bind(report.severity)
        .bind(Utc::now())
        .bind(report.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update report", e))
    }

    /// Set a report's status and resolution time.
    pub async fn update_status(
        &self,
        id: ReportId,
        status: ReportStatus,
        resolved_at: Option<DateTime<Utc>>,
    ) -> AppResult<Report> {
        sqlx::query_as::<_, Report>(
            "UPDATE disaster_reports SET status = ?, resolved_at = ?, updated_at = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(status)
        .bind(resolved_at)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update report status", e)
        })
    }
}
