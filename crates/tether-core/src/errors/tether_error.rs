use super::{BackendError, ChannelError};

/// Top-level error for every Tether subsystem.
#[derive(Debug, thiserror::Error)]
pub enum TetherError {
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("rate-limit cache error at {path}: {reason}")]
    CacheError { path: String, reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("unknown container kind: {0}")]
    UnknownContainerKind(String),

    #[error("bridge has been disposed")]
    Disposed,
}
