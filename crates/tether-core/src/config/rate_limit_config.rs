use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Rate-limit cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Whether the cache file is read on startup and written on updates.
    pub enabled: bool,
    /// Override for the per-user cache path (`~/.tether/rate-limits.json`).
    pub cache_path: Option<PathBuf>,
    /// Snapshots older than this are still displayed but flagged stale.
    pub max_age_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_RATE_LIMIT_ENABLED,
            cache_path: None,
            max_age_secs: defaults::DEFAULT_RATE_LIMIT_MAX_AGE_SECS,
        }
    }
}
