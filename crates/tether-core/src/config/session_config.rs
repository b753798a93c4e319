use serde::{Deserialize, Serialize};

use super::defaults;

/// Session panel controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Replay full state when a container reports `ready`.
    pub replay_on_ready: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            replay_on_ready: defaults::DEFAULT_REPLAY_ON_READY,
        }
    }
}
