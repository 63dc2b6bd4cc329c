//! Emergency resource registry entities.

pub mod availability;
pub mod model;

pub use availability::Availability;
pub use model::{CreateResource, Resource, ResourceChanges};
