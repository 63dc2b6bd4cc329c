//! Request DTOs with validation.
//!
//! Required text fields default to empty so that a missing key and a
//! blank value fail the same service-level check.

use serde::{Deserialize, Serialize};
use validator::Validate;

use reliefhub_core::error::AppError;
use reliefhub_core::result::AppResult;
use reliefhub_core::types::{ReportId, UserId};
use reliefhub_entity::resource::ResourceChanges;
use reliefhub_entity::task::TaskStatus;
use reliefhub_service::{NewAlert, NewReport, NewResource, SignupInput, TaskUpdate};

/// Signup request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

impl From<SignupRequest> for SignupInput {
    fn from(req: SignupRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
            phone: req.phone,
            location: req.location,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// New disaster report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubmitReportRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: Option<f64>,
    pub severity: Option<String>,
    pub image_url: Option<String>,
}

impl From<SubmitReportRequest> for NewReport {
    fn from(req: SubmitReportRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            location: req.location,
            latitude: req.latitude,
            longitude: req.longitude,
            severity: req.severity,
            image_url: req.image_url,
        }
    }
}

/// Citizen edit of their own report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReportRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
}

/// Admin status change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// Admin volunteer assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignVolunteerRequest {
    pub volunteer_id: Option<UserId>,
    pub task_description: Option<String>,
}

/// New resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateResourceRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub resource_type: String,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

impl From<CreateResourceRequest> for NewResource {
    fn from(req: CreateResourceRequest) -> Self {
        Self {
            name: req.name,
            resource_type: req.resource_type,
            quantity: req.quantity,
            unit: req.unit,
            location: req.location,
            contact_person: req.contact_person,
            contact_phone: req.contact_phone,
        }
    }
}

/// Partial resource update; absent keys are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateResourceRequest {
    pub name: Option<String>,
    pub resource_type: Option<String>,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}

impl UpdateResourceRequest {
    /// Parses the availability and builds the change set.
    pub fn into_changes(self) -> AppResult<ResourceChanges> {
        let availability = self
            .availability
            .as_deref()
            .map(str::parse)
            .transpose()?;
        Ok(ResourceChanges {
            name: self.name,
            resource_type: self.resource_type,
            quantity: self.quantity,
            unit: self.unit,
            location: self.location,
            availability,
            contact_person: self.contact_person,
            contact_phone: self.contact_phone,
        })
    }
}

/// New alert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAlertRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    pub alert_level: Option<String>,
    pub report_id: Option<ReportId>,
    pub is_broadcast: Option<bool>,
    pub target_role: Option<String>,
}

impl From<CreateAlertRequest> for NewAlert {
    fn from(req: CreateAlertRequest) -> Self {
        Self {
            title: req.title,
            message: req.message,
            alert_level: req.alert_level,
            report_id: req.report_id,
            is_broadcast: req.is_broadcast,
            target_role: req.target_role,
        }
    }
}

/// Volunteer task edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl UpdateTaskRequest {
    pub fn into_update(self) -> AppResult<TaskUpdate> {
        Ok(TaskUpdate {
            status: self
                .status
                .as_deref()
                .map(str::parse::<TaskStatus>)
                .transpose()?,
            notes: self.notes,
        })
    }
}

/// `?status=` filter on the volunteer task list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<String>,
}

impl TaskListQuery {
    pub fn status(&self) -> AppResult<Option<TaskStatus>> {
        parse_filter(self.status.as_deref())
    }
}

/// `?limit=` on the public alert feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicAlertsQuery {
    pub limit: Option<i64>,
}

/// `?type=` on the public resource list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicResourcesQuery {
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
}

/// Parses an optional enum filter; blank means no filter.
pub fn parse_filter<T>(raw: Option<&str>) -> AppResult<Option<T>>
where
    T: std::str::FromStr<Err = AppError>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}
