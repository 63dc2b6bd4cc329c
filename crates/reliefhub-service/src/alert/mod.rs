//! Alert broadcast use cases.

pub mod service;

pub use service::{AlertService, NewAlert};
