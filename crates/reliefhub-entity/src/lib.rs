//! # reliefhub-entity
//!
//! Domain entity models for ReliefHub. Every struct in this crate
//! represents a database table row or a domain value object. Row types
//! derive `sqlx::FromRow`; enums are stored as lowercase TEXT and parse
//! case-insensitively via `FromStr`.

pub mod alert;
pub mod report;
pub mod resource;
pub mod session;
pub mod task;
pub mod user;
