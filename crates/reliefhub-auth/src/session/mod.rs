//! Cookie session management.

pub mod manager;
pub mod token;

pub use manager::{LoginResult, SessionManager};
pub use token::SessionSecret;
