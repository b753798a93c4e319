//! Compiled-in configuration defaults.

use crate::constants;

pub const DEFAULT_REPLAY_ON_READY: bool = true;

/// Zero disables marker expiry.
pub const DEFAULT_PENDING_TTL_SECS: u64 = 0;

pub const DEFAULT_VIRTUAL_DOC_SCHEME: &str = constants::DEFAULT_VIRTUAL_DOC_SCHEME;

pub const DEFAULT_RATE_LIMIT_ENABLED: bool = true;
pub const DEFAULT_RATE_LIMIT_MAX_AGE_SECS: u64 = 3600;

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
