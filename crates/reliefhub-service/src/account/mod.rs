//! Account signup, login and administration.

pub mod service;

pub use service::{AccountService, SignupInput};
