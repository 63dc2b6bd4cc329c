//! First-run provisioning configuration.

use serde::{Deserialize, Serialize};

/// Seed administrator created when the database has no account with
/// `admin_email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Whether to seed the administrator at all.
    #[serde(default = "default_true")]
    pub seed_admin: bool,
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default = "default_admin_phone")]
    pub admin_phone: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            seed_admin: true,
            admin_name: default_admin_name(),
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
            admin_phone: default_admin_phone(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_admin_name() -> String {
    "Admin".to_string()
}

fn default_admin_email() -> String {
    "admin@disaster.com".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

fn default_admin_phone() -> String {
    "9999999999".to_string()
}
