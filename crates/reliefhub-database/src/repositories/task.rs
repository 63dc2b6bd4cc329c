//! Volunteer task repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_core::types::{ReportId, TaskId, UserId};
use reliefhub_entity::task::{CreateTask, Task, TaskStatus};

/// Per-status task totals for one volunteer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub assigned: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub failed: i64,
}

impl TaskCounts {
    /// Sum over every status.
    pub fn total(&self) -> i64 {
        self.assigned + self.in_progress + self.completed + self.failed
    }
}

/// Repository for volunteer task operations.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a task by primary key.
    pub async fn find_by_id(&self, id: TaskId) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM volunteer_tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task", e))
    }

    /// All tasks attached to a report, in assignment order.
    pub async fn find_by_report(&self, report_id: ReportId) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM volunteer_tasks WHERE report_id = ? ORDER BY assigned_at ASC, id ASC",
        )
        .bind(report_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list tasks for report", e)
        })
    }

    /// Number of tasks attached to a report.
    pub async fn count_by_report(&self, report_id: ReportId) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM volunteer_tasks WHERE report_id = ?")
            .bind(report_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tasks", e))
    }

    /// A volunteer's tasks, newest assignment first, optionally filtered
    /// by status and capped at `limit`.
    pub async fn find_by_volunteer(
        &self,
        volunteer_id: UserId,
        status: Option<TaskStatus>,
        limit: Option<i64>,
    ) -> AppResult<Vec<Task>> {
        // SQLite treats a negative LIMIT as unbounded.
        let limit = limit.unwrap_or(-1);
        let query = match status {
            Some(status) => sqlx::query_as::<_, Task>(
                "SELECT * FROM volunteer_tasks WHERE volunteer_id = ? AND status = ? \
                 ORDER BY assigned_at DESC, id DESC LIMIT ?",
            )
            .bind(volunteer_id)
            .bind(status),
            None => sqlx::query_as::<_, Task>(
                "SELECT * FROM volunteer_tasks WHERE volunteer_id = ? \
                 ORDER BY assigned_at DESC, id DESC LIMIT ?",
            )
            .bind(volunteer_id),
        };
        query
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list volunteer tasks", e)
            })
    }

    /// Per-status totals of a volunteer's tasks.
    pub async fn count_by_volunteer(&self, volunteer_id: UserId) -> AppResult<TaskCounts> {
        let rows: Vec<(TaskStatus, i64)> = sqlx::query_as(
            "SELECT status, COUNT(*) FROM volunteer_tasks WHERE volunteer_id = ? GROUP BY status",
        )
        .bind(volunteer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count volunteer tasks", e)
        })?;

        let mut counts = TaskCounts::default();
        for (status, n) in rows {
            match status {
                TaskStatus::Assigned => counts.assigned = n,
                TaskStatus::InProgress => counts.in_progress = n,
                TaskStatus::Completed => counts.completed = n,
                TaskStatus::Failed => counts.failed = n,
            }
        }
        Ok(counts)
    }

    /// Create a task in `assigned`.
    pub async fn create(&self, data: &CreateTask) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO volunteer_tasks (volunteer_id, report_id, task_description, status, assigned_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(data.volunteer_id)
        .bind(data.report_id)
        .bind(&data.task_description)
        .bind(TaskStatus::Assigned)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task", e))
    }

    /// Persist status, timestamps and notes of a task.
    pub async fn update(&self, task: &Task) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "UPDATE volunteer_tasks SET status = ?, started_at = ?, completed_at = ?, notes = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(task.status)
        .bind(task.started_at)
        .bind(task.completed_at)
        .bind(&task.notes)
        .bind(task.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update task", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::ReportRepository;
    use crate::repositories::test_support::{db, report, user};
    use reliefhub_entity::user::UserRole;

    #[tokio::test]
    async fn test_create_and_update() {
        let db = db().await;
        let citizen = user(&db, "c@example.com", UserRole::Citizen).await;
        let vol = user(&db, "v@example.com", UserRole::Volunteer).await;
        let r = report(&db, &citizen, "Flood").await;
        let repo = TaskRepository::new(db.pool().clone());

        let mut task = repo
            .create(&CreateTask {
                volunteer_id: vol.id,
                report_id: r.id,
                task_description: "clear debris".into(),
            })
            .await
            .unwrap();
        assert_eq!(task.status, TaskStatus::Assigned);

        task.transition(TaskStatus::InProgress, Utc::now());
        task.notes = Some("on site".into());
        let saved = repo.update(&task).await.unwrap();
        assert_eq!(saved.status, TaskStatus::InProgress);
        assert!(saved.started_at.is_some());
        assert_eq!(saved.notes.as_deref(), Some("on site"));
        assert_eq!(repo.count_by_report(r.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_counts_and_recent() {
        let db = db().await;
        let citizen = user(&db, "c@example.com", UserRole::Citizen).await;
        let vol = user(&db, "v@example.com", UserRole::Volunteer).await;
        let r = report(&db, &citizen, "Flood").await;
        let repo = TaskRepository::new(db.pool().clone());

        for i in 0..7 {
            let mut t = repo
                .create(&CreateTask {
                    volunteer_id: vol.id,
                    report_id: r.id,
                    task_description: format!("task {i}"),
                })
                .await
                .unwrap();
            if i < 2 {
                t.transition(TaskStatus::Completed, Utc::now());
                repo.update(&t).await.unwrap();
            }
        }

        let counts = repo.count_by_volunteer(vol.id).await.unwrap();
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.completed, 2);
        assert_eq!(counts.assigned, 5);
        assert_eq!(counts.in_progress, 0);

        let recent = repo.find_by_volunteer(vol.id, None, Some(5)).await.unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].task_description, "task 6");

        let done = repo
            .find_by_volunteer(vol.id, Some(TaskStatus::Completed), None)
            .await
            .unwrap();
        assert_eq!(done.len(), 2);
    }

    #[tokio::test]
    async fn test_tasks_cascade_with_report() {
        let db = db().await;
        let citizen = user(&db, "c@example.com", UserRole::Citizen).await;
        let vol = user(&db, "v@example.com", UserRole::Volunteer).await;
        let r = report(&db, &citizen, "Flood").await;
        let repo = TaskRepository::new(db.pool().clone());
        repo.create(&CreateTask {
            volunteer_id: vol.id,
            report_id: r.id,
            task_description: "x".into(),
        })
        .await
        .unwrap();

        sqlx::query("DELETE FROM disaster_reports WHERE id = ?")
            .bind(r.id)
            .execute(db.pool())
            .await
            .unwrap();
        assert_eq!(repo.count_by_report(r.id).await.unwrap(), 0);
        assert!(
            ReportRepository::new(db.pool().clone())
                .find_by_id(r.id)
                .await
                .unwrap()
                .is_none()
        );
    }
}
