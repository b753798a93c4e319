//! Capability traits at each seam of the bridge.

mod backend;
mod container;

pub use backend::IBackend;
pub use container::{HostEvent, HostListener, IContainerAdapter, IHostContainer, MessageHandler};
