//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Credential and signup policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length. The default only rejects empty passwords.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Roles a caller may pick for themselves at signup. Every role by
    /// default; narrow this to keep `admin` out of self-registration.
    #[serde(default = "default_signup_roles")]
    pub signup_roles: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min(),
            signup_roles: default_signup_roles(),
        }
    }
}

impl AuthConfig {
    /// Whether `role` may be self-selected at signup (case-insensitive).
    pub fn allows_signup_role(&self, role: &str) -> bool {
        self.signup_roles
            .iter()
            .any(|r| r.eq_ignore_ascii_case(role))
    }
}

fn default_password_min() -> usize {
    1
}

fn default_signup_roles() -> Vec<String> {
    ["citizen", "volunteer", "admin"]
        .into_iter()
        .map(String::from)
        .collect()
}
