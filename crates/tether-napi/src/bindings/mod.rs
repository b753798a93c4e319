//! NAPI-exported classes.

pub mod bridge;
