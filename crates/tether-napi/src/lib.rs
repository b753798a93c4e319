//! # tether-napi
//!
//! NAPI bindings for the extension host.
//! Exposes one `TetherBridge` class per activation; the host pushes container
//! notifications and backend events in and drains outbound payloads out.
//!
//! ## Architecture
//!
//! - `bindings/`: the `#[napi]` class
//! - `conversions/`: `TetherError` → `napi::Error` with stable error codes

pub mod bindings;
pub mod conversions;
