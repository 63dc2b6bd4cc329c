//! Volunteer task assignment and the assignee-only task lifecycle.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use reliefhub_core::error::AppError;
use reliefhub_core::events::{EventPayload, TaskEvent};
use reliefhub_core::result::AppResult;
use reliefhub_core::traits::EventPublisher;
use reliefhub_core::types::{ReportId, TaskId, UserId};
use reliefhub_database::repositories::{ReportRepository, TaskRepository, UserRepository};
use reliefhub_entity::task::{CreateTask, Task, TaskStatus};
use reliefhub_entity::user::{User, UserRole};

use crate::context::RequestContext;
use crate::lookup::users_by_id;
use crate::publish::emit;

/// A task with its assigned volunteer.
#[derive(Debug, Clone)]
pub struct TaskDetails {
    pub task: Task,
    pub volunteer: Option<User>,
}

/// Direct overwrite of a task's status and notes.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub status: Option<TaskStatus>,
    pub notes: Option<String>,
}

/// Handles volunteer task operations.
#[derive(Debug, Clone)]
pub struct TaskService {
    task_repo: Arc<TaskRepository>,
    report_repo: Arc<ReportRepository>,
    user_repo: Arc<UserRepository>,
    events: Arc<dyn EventPublisher>,
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(
        task_repo: Arc<TaskRepository>,
        report_repo: Arc<ReportRepository>,
        user_repo: Arc<UserRepository>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            task_repo,
            report_repo,
            user_repo,
            events,
        }
    }

    /// Assigns a volunteer to a report.
    pub async fn assign(
        &self,
        ctx: &RequestContext,
        report_id: ReportId,
        volunteer_id: Option<UserId>,
        description: &str,
    ) -> AppResult<TaskDetails> {
        self.report_repo
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| AppError::not_found("Report not found"))?;

        let description = description.trim();
        let volunteer_id = match volunteer_id {
            Some(id) if !description.is_empty() => id,
            _ => {
                return Err(AppError::validation(
                    "Missing volunteer_id or task_description",
                ));
            }
        };

        let volunteer = self
            .user_repo
            .find_by_id(volunteer_id)
            .await?
            .ok_or_else(|| AppError::not_found("Volunteer not found"))?;
        if volunteer.role != UserRole::Volunteer {
            return Err(AppError::validation("Selected user is not a volunteer"));
        }

        let task = self
            .task_repo
            .create(&CreateTask {
                volunteer_id,
                report_id,
                task_description: description.to_string(),
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            task_id = %task.id,
            report_id = %report_id,
            volunteer_id = %volunteer_id,
            "Volunteer assigned"
        );
        emit(
            self.events.as_ref(),
            Some(ctx.user_id),
            EventPayload::Task(TaskEvent::Assigned {
                task_id: task.id,
                report_id,
                volunteer_id,
            }),
        )
        .await;

        Ok(TaskDetails {
            task,
            volunteer: Some(volunteer),
        })
    }

    /// The caller's tasks, newest assignment first.
    pub async fn list_own(
        &self,
        ctx: &RequestContext,
        status: Option<TaskStatus>,
    ) -> AppResult<Vec<TaskDetails>> {
        let tasks = self
            .task_repo
            .find_by_volunteer(ctx.user_id, status, None)
            .await?;
        self.with_volunteers(tasks).await
    }

    /// One of the caller's tasks.
    pub async fn get_own(&self, ctx: &RequestContext, id: TaskId) -> AppResult<TaskDetails> {
        let task = self.find_owned(ctx, id).await?;
        self.with_volunteer(task).await
    }

    /// Moves an assigned task to in_progress.
    pub async fn start(&self, ctx: &RequestContext, id: TaskId) -> AppResult<TaskDetails> {
        let task = self.find_owned(ctx, id).await?;
        if task.status != TaskStatus::Assigned {
            return Err(AppError::validation("Task must be in ASSIGNED status"));
        }
        self.save_transition(ctx, task, Some(TaskStatus::InProgress), None)
            .await
    }

    /// Marks a task completed from any state except completed.
    pub async fn complete(&self, ctx: &RequestContext, id: TaskId) -> AppResult<TaskDetails> {
        let task = self.find_owned(ctx, id).await?;
        if task.status == TaskStatus::Completed {
            return Err(AppError::validation("Task already completed"));
        }
        self.save_transition(ctx, task, Some(TaskStatus::Completed), None)
            .await
    }

    /// Overwrites status and notes without transition checks.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: TaskId,
        update: TaskUpdate,
    ) -> AppResult<TaskDetails> {
        let task = self.find_owned(ctx, id).await?;
        self.save_transition(ctx, task, update.status, update.notes)
            .await
    }

    async fn save_transition(
        &self,
        ctx: &RequestContext,
        mut task: Task,
        status: Option<TaskStatus>,
        notes: Option<String>,
    ) -> AppResult<TaskDetails> {
        let old_status = task.status;
        if let Some(status) = status {
            task.transition(status, Utc::now());
        }
        if notes.is_some() {
            task.notes = notes;
        }
        let task = self.task_repo.update(&task).await?;

        if task.status != old_status {
            info!(
                user_id = %ctx.user_id,
                task_id = %task.id,
                old_status = %old_status,
                new_status = %task.status,
                "Task status changed"
            );
            emit(
                self.events.as_ref(),
                Some(ctx.user_id),
                EventPayload::Task(TaskEvent::StatusChanged {
                    task_id: task.id,
                    volunteer_id: task.volunteer_id,
                    old_status: old_status.to_string(),
                    new_status: task.status.to_string(),
                }),
            )
            .await;
        }

        self.with_volunteer(task).await
    }

    async fn find_owned(&self, ctx: &RequestContext, id: TaskId) -> AppResult<Task> {
        let task = self
            .task_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))?;
        if !task.is_assigned_to(ctx.user_id) {
            return Err(AppError::forbidden("This task is not assigned to you"));
        }
        Ok(task)
    }

    async fn with_volunteer(&self, task: Task) -> AppResult<TaskDetails> {
        let volunteer = self.user_repo.find_by_id(task.volunteer_id).await?;
        Ok(TaskDetails { task, volunteer })
    }

    pub(crate) async fn with_volunteers(&self, tasks: Vec<Task>) -> AppResult<Vec<TaskDetails>> {
        let volunteers = users_by_id(&self.user_repo, tasks.iter().map(|t| t.volunteer_id)).await?;
        Ok(tasks
            .into_iter()
            .map(|task| TaskDetails {
                volunteer: volunteers.get(&task.volunteer_id).cloned(),
                task,
            })
            .collect())
    }
}
