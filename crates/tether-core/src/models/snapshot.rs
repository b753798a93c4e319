use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{RateLimitSnapshot, TranscriptEntry, UsageSummary};

/// Full, replayable view of the session, sent to a newly bound container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionSnapshot {
    pub entries: Vec<TranscriptEntry>,
    pub processing: bool,
    pub usage: UsageSummary,
    pub rate_limits: Option<RateLimitSnapshot>,
    /// Most recent backend failure, cleared by the next user input.
    pub last_error: Option<String>,
}
