//! Volunteer handlers: work assigned tasks.

use axum::Json;
use axum::extract::State;

use reliefhub_core::types::TaskId;

use crate::dto::request::{TaskListQuery, UpdateTaskRequest};
use crate::dto::response::{
    TaskListResponse, TaskMessage, TaskResponse, VolunteerDashboardResponse,
};
use crate::error::ApiResult;
use crate::extractors::{ApiJson, ApiPath, ApiQuery, VolunteerUser};
use crate::state::AppState;

/// GET /api/volunteer/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    VolunteerUser(auth): VolunteerUser,
) -> ApiResult<Json<VolunteerDashboardResponse>> {
    let dashboard = state.dashboard_service.volunteer(auth.context()).await?;
    Ok(Json(dashboard.into()))
}

/// GET /api/volunteer/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    VolunteerUser(auth): VolunteerUser,
    ApiQuery(query): ApiQuery<TaskListQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    let tasks = state
        .task_service
        .list_own(auth.context(), query.status()?)
        .await?;
    Ok(Json(tasks.into()))
}

/// GET /api/volunteer/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    VolunteerUser(auth): VolunteerUser,
    ApiPath(id): ApiPath<TaskId>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state.task_service.get_own(auth.context(), id).await?;
    Ok(Json(task.into()))
}

/// PATCH /api/volunteer/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    VolunteerUser(auth): VolunteerUser,
    ApiPath(id): ApiPath<TaskId>,
    ApiJson(req): ApiJson<UpdateTaskRequest>,
) -> ApiResult<Json<TaskMessage>> {
    let task = state
        .task_service
        .update(auth.context(), id, req.into_update()?)
        .await?;
    Ok(Json(TaskMessage {
        message: "Task updated successfully".to_string(),
        task: task.into(),
    }))
}

/// POST /api/volunteer/tasks/{id}/start
pub async fn start_task(
    State(state): State<AppState>,
    VolunteerUser(auth): VolunteerUser,
    ApiPath(id): ApiPath<TaskId>,
) -> ApiResult<Json<TaskMessage>> {
    let task = state.task_service.start(auth.context(), id).await?;
    Ok(Json(TaskMessage {
        message: "Task started".to_string(),
        task: task.into(),
    }))
}

/// POST /api/volunteer/tasks/{id}/complete
pub async fn complete_task(
    State(state): State<AppState>,
    VolunteerUser(auth): VolunteerUser,
    ApiPath(id): ApiPath<TaskId>,
) -> ApiResult<Json<TaskMessage>> {
    let task = state.task_service.complete(auth.context(), id).await?;
    Ok(Json(TaskMessage {
        message: "Task marked as completed".to_string(),
        task: task.into(),
    }))
}
