//! Configuration: one section per subsystem, aggregated by [`TetherConfig`].

pub mod content_config;
pub mod defaults;
pub mod ledger_config;
pub mod observability_config;
pub mod rate_limit_config;
pub mod session_config;
mod tether_config;

pub use content_config::ContentConfig;
pub use ledger_config::LedgerConfig;
pub use observability_config::ObservabilityConfig;
pub use rate_limit_config::RateLimitConfig;
pub use session_config::SessionConfig;
pub use tether_config::TetherConfig;
