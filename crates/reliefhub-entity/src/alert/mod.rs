//! Alert entities.

pub mod level;
pub mod model;

pub use level::AlertLevel;
pub use model::{Alert, CreateAlert};
