//! Real-time event broadcast configuration.

use serde::{Deserialize, Serialize};

/// In-process broadcast hub settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Capacity of the broadcast channel. Slow subscribers lag past this.
    #[serde(default = "default_capacity")]
    pub channel_capacity: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    256
}
