/// Tether system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// URI scheme under which diff bodies are exposed to the host's document system.
pub const DEFAULT_VIRTUAL_DOC_SCHEME: &str = "tether-diff";

/// Identifier prefix for diff bodies stored in the virtual content registry.
pub const DIFF_ID_PREFIX: &str = "diff://";

/// Directory (under the user's home) holding per-user Tether state.
pub const USER_STATE_DIR: &str = ".tether";

/// File name of the rate-limit cache inside [`USER_STATE_DIR`].
pub const RATE_LIMIT_CACHE_FILE: &str = "rate-limits.json";

/// Environment variable overriding the log filter.
pub const ENV_LOG_FILTER: &str = "TETHER_LOG";

/// Environment variable overriding the rate-limit cache path.
pub const ENV_RATE_LIMIT_CACHE: &str = "TETHER_RATE_LIMIT_CACHE";

/// Environment variable overriding the pending-marker TTL (seconds, 0 disables).
pub const ENV_PENDING_TTL_SECS: &str = "TETHER_PENDING_TTL_SECS";

/// Maximum number of UI actions a host-polled backend queue holds before
/// refusing new ones.
pub const BACKEND_QUEUE_MAX: usize = 256;
