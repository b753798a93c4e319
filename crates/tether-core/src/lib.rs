//! # tether-core
//!
//! Foundation crate for the Tether extension-to-UI bridge.
//! Defines the wire models exchanged between the host, the UI containers and the
//! backend, the capability traits at each seam, the error taxonomy, configuration
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TetherConfig;
pub use errors::{TetherError, TetherResult};
pub use models::{
    BackendEvent, ContainerKind, OutboundMessage, SessionSnapshot, TranscriptEntry, UiAction,
    UsageSummary,
};
