//! # reliefhub-auth
//!
//! Authentication and authorization for ReliefHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and policy enforcement
//! - `session`: opaque session secrets, login and session validation
//! - `rbac`: the admin and volunteer capability gates

pub mod password;
pub mod rbac;
pub mod session;

pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{Capability, require_admin, require_volunteer};
pub use session::{LoginResult, SessionManager, SessionSecret};
