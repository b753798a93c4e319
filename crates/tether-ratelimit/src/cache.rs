//! RateLimitCache: whole-file JSON cache of a [`RateLimitSnapshot`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};

use tether_core::config::RateLimitConfig;
use tether_core::constants::{RATE_LIMIT_CACHE_FILE, USER_STATE_DIR};
use tether_core::errors::{TetherError, TetherResult};
use tether_core::models::RateLimitSnapshot;

/// Handle to the rate-limit cache file.
#[derive(Debug, Clone)]
pub struct RateLimitCache {
    path: PathBuf,
}

impl RateLimitCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the cache location from config, falling back to the per-user
    /// default. Returns `None` when disabled or no home directory is known.
    pub fn from_config(config: &RateLimitConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        config
            .cache_path
            .clone()
            .or_else(default_cache_path)
            .map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached snapshot. Missing, unreadable and malformed files all
    /// read as `None`.
    pub fn load(&self) -> Option<RateLimitSnapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "rate-limit cache miss");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring malformed rate-limit cache");
                None
            }
        }
    }

    /// Overwrite the cache with `snapshot`.
    ///
    /// Writes a sibling temp file and renames it over the target so a reader
    /// never observes a half-written file.
    pub fn store(&self, snapshot: &RateLimitSnapshot) -> TetherResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.cache_error(e))?;
        }
        let body = serde_json::to_string_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| self.cache_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.cache_error(e))?;
        debug!(path = %self.path.display(), "rate-limit cache updated");
        Ok(())
    }

    /// Whether `snapshot` was fetched within `max_age` of now.
    pub fn is_fresh(snapshot: &RateLimitSnapshot, max_age: Duration) -> bool {
        let Some(age_ms) = Utc::now().timestamp_millis().checked_sub(snapshot.timestamp) else {
            return false;
        };
        age_ms >= 0 && (age_ms as u128) <= max_age.as_millis()
    }

    fn cache_error(&self, e: std::io::Error) -> TetherError {
        TetherError::CacheError {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

/// `~/.tether/rate-limits.json`, if a home directory is known.
pub fn default_cache_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(USER_STATE_DIR).join(RATE_LIMIT_CACHE_FILE))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
