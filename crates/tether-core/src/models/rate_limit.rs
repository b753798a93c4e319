use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Plan utilisation as last reported by the backend.
///
/// This is also the on-disk format of the per-user rate-limit cache, so field
/// names are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateLimitSnapshot {
    /// Utilisation of the rolling 5-hour window, in percent.
    pub session5h: f64,
    /// Utilisation of the rolling 7-day window, in percent.
    pub weekly7d: f64,
    #[serde(default)]
    pub reset5h: Option<String>,
    #[serde(default)]
    pub reset7d: Option<String>,
    /// Unix epoch milliseconds at which the snapshot was fetched.
    pub timestamp: i64,
}

impl RateLimitSnapshot {
    /// When the snapshot was fetched, if the timestamp is representable.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
