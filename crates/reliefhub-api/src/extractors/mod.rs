//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;
pub mod query;
pub mod role;

pub use auth::AuthUser;
pub use json::ApiJson;
pub use pagination::PaginationParams;
pub use path::ApiPath;
pub use query::ApiQuery;
pub use role::{AdminUser, VolunteerUser};
