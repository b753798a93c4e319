//! Raw actions issued by a UI container.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The user's answer to a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum PermissionDecision {
    Allow,
    Deny,
    AlwaysAllow,
}

/// A user action posted by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum UiAction {
    /// The container finished loading and wants the current state.
    Ready,
    SendMessage { text: String },
    #[serde(rename_all = "camelCase")]
    PermissionResponse {
        request_id: String,
        decision: PermissionDecision,
    },
    Stop,
    NewSession,
    #[serde(rename_all = "camelCase")]
    DismissDiff { diff_id: String },
}

impl UiAction {
    /// Stable short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::Ready => "ready",
            UiAction::SendMessage { .. } => "sendMessage",
            UiAction::PermissionResponse { .. } => "permissionResponse",
            UiAction::Stop => "stop",
            UiAction::NewSession => "newSession",
            UiAction::DismissDiff { .. } => "dismissDiff",
        }
    }
}
