//! Resource registry use cases.

pub mod service;

pub use service::{NewResource, ResourceService};
