//! Span definitions per controller operation: bind, relay outbound, relay inbound.

/// Create a container-binding span.
#[macro_export]
macro_rules! bind_span {
    ($kind:expr) => {
        tracing::info_span!("tether.bind", kind = %$kind)
    };
}

/// Create a span for an action travelling UI → backend.
#[macro_export]
macro_rules! relay_outbound_span {
    ($kind:expr, $action:expr) => {
        tracing::debug_span!("tether.relay_outbound", kind = %$kind, action = $action)
    };
}

/// Create a span for an event travelling backend → UI.
#[macro_export]
macro_rules! relay_inbound_span {
    ($event:expr) => {
        tracing::debug_span!("tether.relay_inbound", event = $event)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const BIND: &str = "tether.bind";
    pub const RELAY_OUTBOUND: &str = "tether.relay_outbound";
    pub const RELAY_INBOUND: &str = "tether.relay_inbound";
}
