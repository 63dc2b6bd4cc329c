//! Admin resource registry management and the public availability list.

use std::sync::Arc;

use tracing::info;

use reliefhub_core::error::AppError;
use reliefhub_core::result::AppResult;
use reliefhub_core::types::ResourceId;
use reliefhub_database::repositories::ResourceRepository;
use reliefhub_entity::resource::{Availability, CreateResource, Resource, ResourceChanges};

use crate::context::RequestContext;

/// Fields accepted when registering a resource.
#[derive(Debug, Clone, Default)]
pub struct NewResource {
    pub name: String,
    pub resource_type: String,
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

/// Handles resource registry operations.
#[derive(Debug, Clone)]
pub struct ResourceService {
    resource_repo: Arc<ResourceRepository>,
}

impl ResourceService {
    /// Creates a new resource service.
    pub fn new(resource_repo: Arc<ResourceRepository>) -> Self {
        Self { resource_repo }
    }

    /// Every registered resource.
    pub async fn list(&self) -> AppResult<Vec<Resource>> {
        self.resource_repo.find_all().await
    }

    /// Available resources, optionally of one type.
    pub async fn list_available(&self, resource_type: Option<&str>) -> AppResult<Vec<Resource>> {
        let resource_type = resource_type.map(str::trim).filter(|t| !t.is_empty());
        self.resource_repo
            .find_by_availability(Availability::Available, resource_type)
            .await
    }

    /// Loads a resource or fails with `NotFound`.
    pub async fn get(&self, id: ResourceId) -> AppResult<Resource> {
        self.resource_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Resource not found"))
    }

    /// Registers a new resource. Name and type are stored exactly as given.
    pub async fn create(&self, ctx: &RequestContext, input: NewResource) -> AppResult<Resource> {
        if input.name.trim().is_empty() || input.resource_type.trim().is_empty() {
            return Err(AppError::validation("Missing required fields"));
        }
        let quantity = input.quantity.unwrap_or(0);
        if quantity < 0 {
            return Err(AppError::validation("Quantity cannot be negative"));
        }

        let resource = self
            .resource_repo
            .create(&CreateResource {
                name: input.name,
                resource_type: input.resource_type,
                quantity,
                unit: input.unit,
                location: input.location,
                contact_person: input.contact_person,
                contact_phone: input.contact_phone,
            })
            .await?;

        info!(user_id = %ctx.user_id, resource_id = %resource.id, "Resource registered");
        Ok(resource)
    }

    /// Merges the provided fields into a resource.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: ResourceId,
        changes: ResourceChanges,
    ) -> AppResult<Resource> {
        if changes.name.as_deref().is_some_and(|n| n.trim().is_empty())
            || changes
                .resource_type
                .as_deref()
                .is_some_and(|t| t.trim().is_empty())
        {
            return Err(AppError::validation("Name and type cannot be empty"));
        }
        let mut resource = self.get(id).await?;
        changes.apply(&mut resource)?;
        let resource = self.resource_repo.update(&resource).await?;
        info!(user_id = %ctx.user_id, resource_id = %id, "Resource updated");
        Ok(resource)
    }

    /// Deletes a resource.
    pub async fn delete(&self, ctx: &RequestContext, id: ResourceId) -> AppResult<()> {
        if !self.resource_repo.delete(id).await? {
            return Err(AppError::not_found("Resource not found"));
        }
        info!(user_id = %ctx.user_id, resource_id = %id, "Resource deleted");
        Ok(())
    }
}
