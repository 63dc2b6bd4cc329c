//! Resource availability states.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a resource can currently be dispatched.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    InUse,
    Exhausted,
}

impl Availability {
    /// Return the availability as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InUse => "in_use",
            Self::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Availability {
    type Err = reliefhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "in_use" => Ok(Self::InUse),
            "exhausted" => Ok(Self::Exhausted),
            _ => Err(reliefhub_core::AppError::validation(format!(
                "Invalid availability: '{s}'. Expected one of: available, in_use, exhausted"
            ))),
        }
    }
}
