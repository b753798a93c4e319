//! Wire models shared by the host, the UI containers and the backend.
//!
//! Every message crossing a boundary is a JSON object internally tagged by
//! `"type"`. Types derive `TS` so the UI imports generated bindings instead of
//! restating the shapes by hand.

pub mod action;
pub mod container;
pub mod event;
pub mod outbound;
pub mod rate_limit;
pub mod snapshot;
pub mod transcript;
pub mod usage;

pub use action::{PermissionDecision, UiAction};
pub use container::ContainerKind;
pub use event::{BackendEvent, FailedAction};
pub use outbound::OutboundMessage;
pub use rate_limit::RateLimitSnapshot;
pub use snapshot::SessionSnapshot;
pub use transcript::{EntryKind, PermissionStatus, TranscriptEntry};
pub use usage::UsageSummary;
