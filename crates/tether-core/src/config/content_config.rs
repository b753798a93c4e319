use serde::{Deserialize, Serialize};

use super::defaults;

/// Virtual content registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// URI scheme registered with the host document system.
    pub scheme: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            scheme: defaults::DEFAULT_VIRTUAL_DOC_SCHEME.to_string(),
        }
    }
}
