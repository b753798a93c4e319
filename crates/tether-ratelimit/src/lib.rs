//! # tether-ratelimit
//!
//! The last known plan utilisation, cached in a JSON file under the user's home
//! so a freshly opened container can show it before the backend reports.
//! A missing or malformed file is a cache miss, never an error.

mod cache;

pub use cache::{default_cache_path, RateLimitCache};
