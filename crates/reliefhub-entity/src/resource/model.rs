//! Resource entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reliefhub_core::AppError;
use reliefhub_core::types::ResourceId;

use super::availability::Availability;

/// An inventory record of emergency supplies or capacity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: ResourceId,
    pub name: String,
    /// Category such as `water`, `shelter` or `medical`.
    pub resource_type: String,
    /// Never negative.
    pub quantity: i64,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub availability: Availability,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a resource.
#[derive(Debug, Clone)]
pub struct CreateResource {
    pub name: String,
    pub resource_type: String,
    pub quantity: i64,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

/// Partial update of a resource. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ResourceChanges {
    pub name: Option<String>,
    pub resource_type: Option<String>,
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub availability: Option<Availability>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

impl ResourceChanges {
    /// Apply the provided fields onto a resource.
    pub fn apply(self, resource: &mut Resource) -> Result<(), AppError> {
        if let Some(quantity) = self.quantity {
            if quantity < 0 {
                return Err(AppError::validation("Quantity cannot be negative"));
            }
            resource.quantity = quantity;
        }
        if let Some(name) = self.name {
            resource.name = name;
        }
        if let Some(resource_type) = self.resource_type {
            resource.resource_type = resource_type;
        }
        if self.unit.is_some() {
            resource.unit = self.unit;
        }
        if self.location.is_some() {
            resource.location = self.location;
        }
        if let Some(availability) = self.availability {
            resource.availability = availability;
        }
        if self.contact_person.is_some() {
            resource.contact_person = self.contact_person;
        }
        if self.contact_phone.is_some() {
            resource.contact_phone = self.contact_phone;
        }
        Ok(())
    }
}
