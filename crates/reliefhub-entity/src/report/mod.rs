//! Disaster report entities.

pub mod model;
pub mod severity;
pub mod status;

pub use model::{CreateReport, Report, ReportChanges};
pub use severity::Severity;
pub use status::ReportStatus;
