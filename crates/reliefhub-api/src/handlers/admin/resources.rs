//! Resource registry management.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use reliefhub_core::error::AppError;
use reliefhub_core::types::ResourceId;
use reliefhub_entity::resource::Resource;

use crate::dto::request::{CreateResourceRequest, UpdateResourceRequest};
use crate::dto::response::{MessageResponse, ResourceListResponse, ResourceMessage};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, ApiJson, ApiPath};
use crate::state::AppState;

/// GET /api/admin/resources
pub async fn list_resources(
    State(state): State<AppState>,
    _: AdminUser,
) -> ApiResult<Json<ResourceListResponse>> {
    let resources = state.resource_service.list().await?;
    Ok(Json(resources.into()))
}

/// POST /api/admin/resources
pub async fn create_resource(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    ApiJson(req): ApiJson<CreateResourceRequest>,
) -> ApiResult<(StatusCode, Json<ResourceMessage>)> {
    req.validate().map_err(AppError::from)?;
    let resource = state
        .resource_service
        .create(auth.context(), req.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ResourceMessage {
            message: "Resource created successfully".to_string(),
            resource,
        }),
    ))
}

/// GET /api/admin/resources/{id}
pub async fn get_resource(
    State(state): State<AppState>,
    _: AdminUser,
    ApiPath(id): ApiPath<ResourceId>,
) -> ApiResult<Json<Resource>> {
    let resource = state.resource_service.get(id).await?;
    Ok(Json(resource))
}

/// PATCH /api/admin/resources/{id}
pub async fn update_resource(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    ApiPath(id): ApiPath<ResourceId>,
    ApiJson(req): ApiJson<UpdateResourceRequest>,
) -> ApiResult<Json<Resource>> {
    req.validate().map_err(AppError::from)?;
    let resource = state
        .resource_service
        .update(auth.context(), id, req.into_changes()?)
        .await?;
    Ok(Json(resource))
}

/// DELETE /api/admin/resources/{id}
pub async fn delete_resource(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    ApiPath(id): ApiPath<ResourceId>,
) -> ApiResult<Json<MessageResponse>> {
    state.resource_service.delete(auth.context(), id).await?;
    Ok(Json(MessageResponse::new("Resource deleted")))
}
