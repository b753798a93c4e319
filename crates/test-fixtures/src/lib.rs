//! Test doubles and scenario data shared by the tether crates' tests.
//!
//! - [`FakeHost`] stands in for a host container: it records everything posted
//!   to it and lets a test fire visibility, disposal and UI messages.
//! - [`RecordingBackend`] records forwarded actions and can be told to refuse them.
//! - `load_fixture` reads JSON scenario files from `data/`.

mod backend;
mod host;

pub use backend::RecordingBackend;
pub use host::{EventLog, FakeHost};

use serde::de::DeserializeOwned;
use std::path::PathBuf;

use tether_core::models::{BackendEvent, PermissionDecision, UiAction, UsageSummary};

/// Root directory of the scenario data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Load a scripted sequence of backend events.
pub fn load_event_script(name: &str) -> Vec<BackendEvent> {
    load_fixture(&format!("scenarios/{name}.json"))
}

// --- Builders ---

pub fn send_message(text: &str) -> UiAction {
    UiAction::SendMessage {
        text: text.to_string(),
    }
}

pub fn permission_response(request_id: &str, decision: PermissionDecision) -> UiAction {
    UiAction::PermissionResponse {
        request_id: request_id.to_string(),
        decision,
    }
}

pub fn usage(input_tokens: u64, output_tokens: u64, total_cost_usd: f64) -> UsageSummary {
    UsageSummary {
        input_tokens,
        output_tokens,
        total_cost_usd,
    }
}

/// Echo of user input, as the backend reports it once recorded.
pub fn user_echo(entry_id: &str, text: &str, usage: Option<UsageSummary>) -> BackendEvent {
    BackendEvent::UserMessage {
        entry_id: Some(entry_id.to_string()),
        text: text.to_string(),
        usage,
    }
}

pub fn assistant(entry_id: &str, text: &str) -> BackendEvent {
    BackendEvent::AssistantMessage {
        entry_id: entry_id.to_string(),
        text: text.to_string(),
        usage: None,
    }
}

pub fn permission_request(request_id: &str, tool: &str) -> BackendEvent {
    BackendEvent::PermissionRequest {
        request_id: request_id.to_string(),
        tool: tool.to_string(),
        description: format!("Allow {tool}?"),
    }
}

pub fn permission_decided(request_id: &str, decision: PermissionDecision) -> BackendEvent {
    BackendEvent::PermissionDecided {
        request_id: request_id.to_string(),
        decision,
    }
}

pub fn diff_proposed(entry_id: &str, path: &str, old_text: &str, new_text: &str) -> BackendEvent {
    BackendEvent::DiffProposed {
        entry_id: entry_id.to_string(),
        path: path.to_string(),
        old_text: old_text.to_string(),
        new_text: new_text.to_string(),
    }
}
