//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Cookie session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether to set the `Secure` attribute on the cookie.
    #[serde(default)]
    pub secure_cookie: bool,
    /// Idle timeout in minutes before a session is rejected.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Absolute session lifetime in hours, regardless of activity.
    #[serde(default = "default_absolute_timeout")]
    pub absolute_timeout_hours: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secure_cookie: false,
            idle_timeout_minutes: default_idle_timeout(),
            absolute_timeout_hours: default_absolute_timeout(),
        }
    }
}

fn default_cookie_name() -> String {
    "reliefhub_session".to_string()
}

fn default_idle_timeout() -> u64 {
    120
}

fn default_absolute_timeout() -> u64 {
    12
}
