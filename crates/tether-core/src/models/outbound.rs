use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{RateLimitSnapshot, SessionSnapshot, TranscriptEntry, UsageSummary};

/// A state delta pushed from the host to the active UI container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum OutboundMessage {
    /// Full state; the container discards whatever it was showing.
    Replay { snapshot: SessionSnapshot },
    /// Another container took over; stop holding focus and resources.
    Deactivate,
    EntryAppended { entry: TranscriptEntry },
    EntryUpdated { entry: TranscriptEntry },
    #[serde(rename_all = "camelCase")]
    EntryRetracted { entry_id: String },
    UsageUpdated { usage: UsageSummary },
    ProcessingChanged { processing: bool },
    RateLimits { snapshot: RateLimitSnapshot },
    Error { message: String },
    SessionReset,
}

impl OutboundMessage {
    /// Stable short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            OutboundMessage::Replay { .. } => "replay",
            OutboundMessage::Deactivate => "deactivate",
            OutboundMessage::EntryAppended { .. } => "entryAppended",
            OutboundMessage::EntryUpdated { .. } => "entryUpdated",
            OutboundMessage::EntryRetracted { .. } => "entryRetracted",
            OutboundMessage::UsageUpdated { .. } => "usageUpdated",
            OutboundMessage::ProcessingChanged { .. } => "processingChanged",
            OutboundMessage::RateLimits { .. } => "rateLimits",
            OutboundMessage::Error { .. } => "error",
            OutboundMessage::SessionReset => "sessionReset",
        }
    }
}
