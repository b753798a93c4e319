//! # tether-ledger
//!
//! Tracks UI-originated actions that the backend has not yet echoed back, so the
//! controller can tell an echo (already rendered optimistically) from a new event.

mod ledger;

pub use ledger::{ExpiredMarkers, OptimisticLedger};
