//! Broadcast hub.

pub mod broadcast;

pub use broadcast::BroadcastHub;
