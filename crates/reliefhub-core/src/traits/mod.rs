//! Core traits defined in `reliefhub-core` and implemented by other crates.

pub mod publisher;

pub use publisher::{EventPublisher, NoopPublisher};
