//! # reliefhub-service
//!
//! Business logic service layer for ReliefHub. Each service orchestrates
//! repositories, the session manager and the event publisher to implement
//! one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod alert;
pub mod bootstrap;
pub mod context;
pub mod dashboard;
mod lookup;
mod publish;
pub mod report;
pub mod resource;
pub mod task;

#[cfg(test)]
pub(crate) mod testing;

pub use account::{AccountService, SignupInput};
pub use alert::{AlertService, NewAlert};
pub use bootstrap::Bootstrapper;
pub use context::RequestContext;
pub use dashboard::DashboardService;
pub use report::{NewReport, ReportDetails, ReportService, ReportStatusView};
pub use resource::{NewResource, ResourceService};
pub use task::{TaskDetails, TaskService, TaskUpdate};
