//! Resource registry repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_core::types::ResourceId;
use reliefhub_entity::resource::{Availability, CreateResource, Resource};

/// Repository for resource CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: SqlitePool,
}

impl ResourceRepository {
    /// Create a new resource repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a resource by primary key.
    pub async fn find_by_id(&self, id: ResourceId) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find resource", e))
    }

    /// Every resource in registration order.
    pub async fn find_all(&self) -> AppResult<Vec<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT * FROM resources ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list resources", e))
    }

    /// Resources with the given availability, optionally of one type.
    pub async fn find_by_availability(
        &self,
        availability: Availability,
        resource_type: Option<&str>,
    ) -> AppResult<Vec<Resource>> {
        let query = match resource_type {
            Some(kind) => sqlx::query_as::<_, Resource>(
                "SELECT * FROM resources WHERE availability = ? AND resource_type = ? ORDER BY id ASC",
            )
            .bind(availability)
            .bind(kind.to_string()),
            None => sqlx::query_as::<_, Resource>(
                "SELECT * FROM resources WHERE availability = ? ORDER BY id ASC",
            )
            .bind(availability),
        };
        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list resources", e))
    }

    /// Count resources, optionally restricted to one availability.
    pub async fn count(&self, availability: Option<Availability>) -> AppResult<i64> {
        let query = match availability {
            Some(a) => sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM resources WHERE availability = ?",
            )
            .bind(a),
            None => sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM resources"),
        };
        query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count resources", e))
    }

    /// Register a new resource as `available`.
    pub async fn create(&self, data: &CreateResource) -> AppResult<Resource> {
        let now = Utc::now();
        sqlx::query_as::<_, Resource>(
            "INSERT INTO resources \
             (name, resource_type, quantity, unit, location, availability, contact_person, contact_phone, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.resource_type)
        .bind(data.quantity)
        .bind(&data.unit)
        .bind(&data.location)
        .bind(Availability::Available)
        .bind(&data.contact_person)
        .bind(&data.contact_phone)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create resource", e))
    }

    /// Persist every mutable field of a resource.
    pub async fn update(&self, resource: &Resource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "UPDATE resources SET name = ?, resource_type = ?, quantity = ?, unit = ?, location = ?, \
             availability = ?, contact_person = ?, contact_phone = ?, updated_at = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(&resource.name)
        .bind(&resource.resource_type)
        .bind(resource.quantity)
        .bind(&resource.unit)
        .bind(&resource.location)
        .bind(resource.availability)
        .bind(&resource.contact_person)
        .bind(&resource.contact_phone)
        .bind(Utc::now())
        .bind(resource.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update resource", e))
    }

    /// Delete a resource. Returns whether a row was removed.
    pub async fn delete(&self, id: ResourceId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM resources WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete resource", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
