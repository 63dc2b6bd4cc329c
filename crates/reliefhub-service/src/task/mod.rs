//! Volunteer task use cases.

pub mod service;

pub use service::{TaskDetails, TaskService, TaskUpdate};
