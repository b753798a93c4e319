//! Global subscriber installation.

pub mod spans;

use tether_core::config::defaults::DEFAULT_LOG_FILTER;
use tether_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber described by `config`.
///
/// Logs go to stderr so they never interleave with a host protocol on stdout.
/// Returns false if a subscriber was already installed (e.g. the host
/// activated the extension twice in one process); that is not an error.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!(
            "tether: invalid log filter {:?} ({e}), falling back to {DEFAULT_LOG_FILTER:?}",
            config.log_filter
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}
