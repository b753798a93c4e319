//! Top-level Tether configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ContentConfig, LedgerConfig, ObservabilityConfig, RateLimitConfig, SessionConfig};
use crate::constants;
use crate::errors::{TetherError, TetherResult};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TETHER_*`, via [`TetherConfig::apply_env_overrides`])
/// 2. TOML supplied by the host extension
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TetherConfig {
    pub session: SessionConfig,
    pub ledger: LedgerConfig,
    pub content: ContentConfig,
    pub rate_limit: RateLimitConfig,
    pub observability: ObservabilityConfig,
}

impl TetherConfig {
    /// Parse a TOML document. Missing sections and keys fall back to defaults.
    pub fn from_toml(toml_str: &str) -> TetherResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| TetherError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> TetherResult<String> {
        toml::to_string_pretty(self).map_err(|e| TetherError::ConfigError(e.to_string()))
    }

    /// Reject values the bridge cannot operate with.
    pub fn validate(&self) -> TetherResult<()> {
        if !is_valid_scheme(&self.content.scheme) {
            return Err(TetherError::ConfigError(format!(
                "content.scheme {:?} is not a valid URI scheme",
                self.content.scheme
            )));
        }
        if self.observability.log_filter.trim().is_empty() {
            return Err(TetherError::ConfigError(
                "observability.log_filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply `TETHER_*` environment overrides. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup (used by tests).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(filter) = lookup(constants::ENV_LOG_FILTER) {
            if !filter.trim().is_empty() {
                self.observability.log_filter = filter;
            }
        }
        if let Some(path) = lookup(constants::ENV_RATE_LIMIT_CACHE) {
            if !path.is_empty() {
                self.rate_limit.cache_path = Some(PathBuf::from(path));
            }
        }
        if let Some(ttl) = lookup(constants::ENV_PENDING_TTL_SECS) {
            if let Ok(secs) = ttl.parse::<u64>() {
                self.ledger.pending_ttl_secs = secs;
            }
        }
    }
}

/// RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
