//! Error codes prefixed to every error message crossing into JS, so the host
//! can branch on `[CODE]` without parsing prose.

use tether_core::errors::{BackendError, ChannelError, TetherError};

pub const CHANNEL_ERROR: &str = "CHANNEL_ERROR";
pub const CONTAINER_DISPOSED: &str = "CONTAINER_DISPOSED";
pub const BACKEND_ERROR: &str = "BACKEND_ERROR";
pub const BACKEND_QUEUE_FULL: &str = "BACKEND_QUEUE_FULL";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CACHE_ERROR: &str = "CACHE_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const INVALID_CONTAINER_KIND: &str = "INVALID_CONTAINER_KIND";
pub const BRIDGE_DISPOSED: &str = "BRIDGE_DISPOSED";

/// The code for a bridge error.
pub fn code_for(error: &TetherError) -> &'static str {
    match error {
        TetherError::Channel(ChannelError::ContainerDisposed { .. }) => CONTAINER_DISPOSED,
        TetherError::Channel(_) => CHANNEL_ERROR,
        TetherError::Backend(BackendError::QueueFull { .. }) => BACKEND_QUEUE_FULL,
        TetherError::Backend(_) => BACKEND_ERROR,
        TetherError::ConfigError(_) => CONFIG_ERROR,
        TetherError::CacheError { .. } => CACHE_ERROR,
        TetherError::SerializationError(_) => SERIALIZATION_ERROR,
        TetherError::UnknownContainerKind(_) => INVALID_CONTAINER_KIND,
        TetherError::Disposed => BRIDGE_DISPOSED,
    }
}

/// Convert a bridge error to a JS error carrying its code.
pub fn to_napi_error(error: TetherError) -> napi::Error {
    napi::Error::from_reason(format!("[{}] {error}", code_for(&error)))
}

pub fn serialization_error(error: serde_json::Error) -> napi::Error {
    to_napi_error(TetherError::from(error))
}
