//! Error taxonomy for the bridge.
//!
//! Not-found conditions (absent ledger markers, absent virtual content) are not
//! errors; they resolve to defaults at the call site. Everything here is
//! recoverable: the bridge degrades to "render nothing or stale" rather than
//! aborting the host.

mod backend_error;
mod channel_error;
mod tether_error;

pub use backend_error::BackendError;
pub use channel_error::ChannelError;
pub use tether_error::TetherError;

/// Crate-wide result alias.
pub type TetherResult<T> = Result<T, TetherError>;
