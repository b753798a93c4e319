use std::sync::Arc;

use test_fixtures::{fixture_exists, load_event_script, EventLog, FakeHost, RecordingBackend};
use tether_core::errors::{ChannelError, TetherError};
use tether_core::models::{BackendEvent, OutboundMessage, UiAction};
use tether_core::traits::{HostEvent, IBackend, IHostContainer};

#[test]
fn scenario_scripts_parse() {
    assert!(fixture_exists("scenarios/tool_turn.json"));
    let events = load_event_script("tool_turn");
    assert_eq!(events.len(), 7);
    assert_eq!(events[0], BackendEvent::Processing { active: true });
    assert!(matches!(events[4], BackendEvent::DiffProposed { .. }));

    let limits = load_event_script("rate_limits");
    assert!(matches!(limits[0], BackendEvent::RateLimits { .. }));
}

#[test]
fn fake_host_records_posts_and_shared_log() {
    let log = EventLog::new();
    let a = FakeHost::with_log("a", &log);
    let b = FakeHost::with_log("b", &log);

    a.post_message(&serde_json::to_value(OutboundMessage::Deactivate).unwrap())
        .unwrap();
    b.post_message(&serde_json::to_value(OutboundMessage::SessionReset).unwrap())
        .unwrap();

    assert_eq!(a.posted_messages(), vec![OutboundMessage::Deactivate]);
    assert_eq!(b.posted_types(), vec!["sessionReset"]);
    assert_eq!(log.entries(), vec!["a:deactivate", "b:sessionReset"]);
}

#[test]
fn fake_host_rejects_posts_after_dispose() {
    let host = FakeHost::new("panel");
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    host.subscribe(Box::new(move |event| sink.lock().unwrap().push(event)));

    host.dispose();

    assert_eq!(*seen.lock().unwrap(), vec![HostEvent::Disposed]);
    let err = host.post_message(&serde_json::json!({"type": "deactivate"}));
    assert!(matches!(err, Err(ChannelError::ContainerDisposed { .. })));
}

#[test]
fn recording_backend_can_refuse() {
    let backend = RecordingBackend::new();
    backend.forward(&UiAction::Stop).unwrap();
    backend.set_unavailable(true);
    let err = backend.forward(&UiAction::Stop).unwrap_err();
    assert!(matches!(err, TetherError::Backend(_)));
    assert_eq!(backend.action_names(), vec!["stop"]);
}
