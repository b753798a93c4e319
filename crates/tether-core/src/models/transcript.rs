//! Transcript entries: the ordered content of a conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::action::PermissionDecision;

/// Resolution state of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum PermissionStatus {
    Pending,
    Allowed,
    Denied,
}

impl From<PermissionDecision> for PermissionStatus {
    fn from(decision: PermissionDecision) -> Self {
        match decision {
            PermissionDecision::Allow | PermissionDecision::AlwaysAllow => {
                PermissionStatus::Allowed
            }
            PermissionDecision::Deny => PermissionStatus::Denied,
        }
    }
}

/// What a transcript entry represents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum EntryKind {
    User,
    Assistant,
    /// A proposed edit whose body lives in the virtual content registry.
    Diff { uri: String, path: String },
    #[serde(rename_all = "camelCase")]
    Permission {
        request_id: String,
        tool: String,
        status: PermissionStatus,
    },
}

/// One entry of the conversation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TranscriptEntry {
    pub id: String,
    pub kind: EntryKind,
    pub text: String,
    /// True while a UI-originated entry awaits its backend echo.
    pub optimistic: bool,
    pub created_at: DateTime<Utc>,
}

impl TranscriptEntry {
    /// Create a confirmed entry with a generated id.
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), kind, text)
    }

    /// Create a confirmed entry with a caller-provided id.
    pub fn with_id(id: impl Into<String>, kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            text: text.into(),
            optimistic: false,
            created_at: Utc::now(),
        }
    }

    /// Create an optimistic user entry for input the UI has already rendered.
    pub fn optimistic_user(text: impl Into<String>) -> Self {
        Self {
            optimistic: true,
            ..Self::new(EntryKind::User, text)
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self.kind, EntryKind::User)
    }

    /// The permission request id, if this is a permission entry.
    pub fn permission_request_id(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Permission { request_id, .. } => Some(request_id),
            _ => None,
        }
    }
}
