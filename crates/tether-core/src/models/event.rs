//! Authoritative events emitted by the backend collaborator.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{PermissionDecision, RateLimitSnapshot, UsageSummary};

/// Which forwarded action a failure refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum FailedAction {
    UserInput,
    #[serde(rename_all = "camelCase")]
    Permission { request_id: String },
    Other,
}

/// An authoritative event. Only the fields needed to match optimistic markers
/// are interpreted; the rest is applied to session state as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum BackendEvent {
    /// Echo of user input as recorded in the authoritative transcript.
    #[serde(rename_all = "camelCase")]
    UserMessage {
        #[serde(default)]
        entry_id: Option<String>,
        text: String,
        #[serde(default)]
        usage: Option<UsageSummary>,
    },
    #[serde(rename_all = "camelCase")]
    AssistantMessage {
        entry_id: String,
        text: String,
        #[serde(default)]
        usage: Option<UsageSummary>,
    },
    #[serde(rename_all = "camelCase")]
    DiffProposed {
        entry_id: String,
        path: String,
        old_text: String,
        new_text: String,
    },
    #[serde(rename_all = "camelCase")]
    PermissionRequest {
        request_id: String,
        tool: String,
        description: String,
    },
    #[serde(rename_all = "camelCase")]
    PermissionDecided {
        request_id: String,
        decision: PermissionDecision,
    },
    Usage { usage: UsageSummary },
    Processing { active: bool },
    RateLimits { snapshot: RateLimitSnapshot },
    ActionFailed { action: FailedAction, message: String },
    SessionReset,
}

impl BackendEvent {
    /// Stable short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            BackendEvent::UserMessage { .. } => "userMessage",
            BackendEvent::AssistantMessage { .. } => "assistantMessage",
            BackendEvent::DiffProposed { .. } => "diffProposed",
            BackendEvent::PermissionRequest { .. } => "permissionRequest",
            BackendEvent::PermissionDecided { .. } => "permissionDecided",
            BackendEvent::Usage { .. } => "usage",
            BackendEvent::Processing { .. } => "processing",
            BackendEvent::RateLimits { .. } => "rateLimits",
            BackendEvent::ActionFailed { .. } => "actionFailed",
            BackendEvent::SessionReset => "sessionReset",
        }
    }
}
