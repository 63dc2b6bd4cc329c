//! Disaster report use cases.

pub mod service;

pub use service::{NewReport, ReportDetails, ReportService, ReportStatusView};
