//! # tether-content
//!
//! Ephemeral, non-file content (diff bodies) addressable through a private URI
//! scheme. The registry decouples "diff becomes available" from "diff is
//! displayed"; the provider answers the host's document-open requests.

pub mod diff;
pub mod provider;
pub mod registry;

pub use diff::{diff_id_for_entry, render_line_diff};
pub use provider::VirtualDocumentProvider;
pub use registry::VirtualContentRegistry;
