use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Optimistic ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Age (seconds) after which an unconsumed marker is expired. 0 = never.
    pub pending_ttl_secs: u64,
}

impl LedgerConfig {
    /// The expiry window, or `None` when markers never expire.
    pub fn pending_ttl(&self) -> Option<Duration> {
        (self.pending_ttl_secs > 0).then(|| Duration::from_secs(self.pending_ttl_secs))
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            pending_ttl_secs: defaults::DEFAULT_PENDING_TTL_SECS,
        }
    }
}
