//! # tether-session
//!
//! The single owner of assistant-session UI state and the adapters that connect
//! it to the host's sidebar view and floating panel.
//!
//! ## Architecture
//!
//! - `state.rs`: `SessionState`, the replayable conversation view
//! - `controller.rs`: `SessionPanelController` (binding, replay, relay, reconciliation)
//! - `adapters/`: `SidebarAdapter` and `PanelAdapter` over `IHostContainer`
//! - `bridge.rs`: `BridgeRuntime`, the controller behind host-polled queues

pub mod adapters;
pub mod bridge;
pub mod controller;
pub mod state;

pub use adapters::{PanelAdapter, SidebarAdapter};
pub use bridge::{BridgeRuntime, OutboxHost, QueuedBackend};
pub use controller::{ControllerPhase, RelayOutcome, SessionPanelController};
pub use state::SessionState;
