//! # reliefhub-realtime
//!
//! In-process event delivery for ReliefHub. Provides:
//!
//! - [`BroadcastHub`], the shipped [`EventPublisher`](reliefhub_core::traits::EventPublisher)
//!   built on a `tokio::sync::broadcast` channel
//! - Delivery counters exposed through [`HubMetrics`]

pub mod hub;
pub mod metrics;

pub use hub::BroadcastHub;
pub use metrics::{HubMetrics, MetricsSnapshot};
