//! Admin handlers. Every handler takes an `AdminUser` as its first extractor.

pub mod alerts;
pub mod dashboard;
pub mod reports;
pub mod resources;
pub mod volunteers;
