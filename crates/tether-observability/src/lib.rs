//! # tether-observability
//!
//! Logging and counters for the bridge: subscriber installation, span macros
//! for the controller's entry points, and [`BridgeMetrics`].

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{BridgeMetrics, MetricsSnapshot};
pub use tracing_setup::init_tracing;
