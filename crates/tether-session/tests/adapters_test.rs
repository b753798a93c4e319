//! Adapter contract: lifecycle translation and lossless message carriage.

use std::sync::{Arc, Mutex};

use serde_json::json;
use test_fixtures::{FakeHost, RecordingBackend};
use tether_core::config::TetherConfig;
use tether_core::models::{ContainerKind, OutboundMessage, UiAction};
use tether_core::traits::IContainerAdapter;
use tether_session::{ControllerPhase, PanelAdapter, SessionPanelController, SidebarAdapter};

fn controller() -> (Arc<SessionPanelController>, Arc<RecordingBackend>) {
    let backend = Arc::new(RecordingBackend::new());
    let controller = Arc::new(SessionPanelController::new(
        TetherConfig::default(),
        backend.clone(),
    ));
    (controller, backend)
}

#[test]
fn attach_subscribes_without_binding() {
    let (controller, _) = controller();
    let host = FakeHost::new("sidebar");

    let sidebar = SidebarAdapter::attach(host.clone(), &controller);

    assert_eq!(host.listener_count(), 1);
    assert_eq!(sidebar.kind(), ContainerKind::Sidebar);
    assert!(sidebar.is_alive());
    assert!(!sidebar.is_visible());
    assert_eq!(controller.phase(), ControllerPhase::Uninitialized);
    assert!(host.posted().is_empty());
}

#[test]
fn panel_without_reveal_waits_for_visibility() {
    let (controller, _) = controller();
    let host = FakeHost::new("panel");

    let panel = PanelAdapter::attach(host.clone(), &controller, false);
    assert_eq!(controller.active_kind(), None);

    host.show();
    assert!(panel.is_visible());
    assert_eq!(controller.active_kind(), Some(ContainerKind::Panel));
    assert_eq!(host.posted_types(), vec!["replay"]);
}

#[test]
fn hiding_keeps_binding_and_deltas_flow() {
    let (controller, _) = controller();
    let host = FakeHost::new("sidebar");
    let sidebar = SidebarAdapter::attach(host.clone(), &controller);
    host.show();

    host.hide();
    controller.relay_inbound(tether_core::models::BackendEvent::Processing { active: true });

    assert!(!sidebar.is_visible());
    assert_eq!(controller.active_kind(), Some(ContainerKind::Sidebar));
    assert_eq!(host.posted_types(), vec!["replay", "processingChanged"]);
}

#[test]
fn send_after_dispose_is_a_noop() {
    let (controller, _) = controller();
    let host = FakeHost::new("panel");
    let panel = PanelAdapter::attach(host.clone(), &controller, true);

    host.dispose();

    assert!(!panel.is_alive());
    assert!(!panel.send(&OutboundMessage::Deactivate));
    assert_eq!(host.posted_types(), vec!["replay"]);
}

#[test]
fn failed_post_reports_undelivered() {
    let (controller, _) = controller();
    let host = FakeHost::new("sidebar");
    let sidebar = SidebarAdapter::attach(host.clone(), &controller);
    host.set_failing(true);

    assert!(!sidebar.send(&OutboundMessage::SessionReset));
    assert!(sidebar.is_alive(), "a failed post does not kill the container");
}

#[test]
fn inbound_payloads_reach_every_handler_intact() {
    let (controller, backend) = controller();
    let host = FakeHost::new("panel");
    let panel = PanelAdapter::attach(host.clone(), &controller, true);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    panel.on_message(Box::new(move |action| sink.lock().unwrap().push(action)));

    host.post_from_ui(json!({
        "type": "permissionResponse",
        "requestId": "perm-9",
        "decision": "alwaysAllow"
    }));

    let expected = UiAction::PermissionResponse {
        request_id: "perm-9".to_string(),
        decision: tether_core::models::PermissionDecision::AlwaysAllow,
    };
    assert_eq!(*seen.lock().unwrap(), vec![expected.clone()]);
    assert_eq!(backend.actions(), vec![expected]);
}

#[test]
fn malformed_payloads_are_dropped_and_counted() {
    let (controller, backend) = controller();
    let host = FakeHost::new("sidebar");
    let _sidebar = SidebarAdapter::attach(host.clone(), &controller);
    host.show();

    host.post_from_ui(json!({ "type": "launchMissiles" }));
    host.post_from_ui(json!({ "type": "sendMessage" }));
    host.post_from_ui(json!("not even an object"));

    assert!(backend.actions().is_empty());
    assert_eq!(controller.metrics().snapshot().malformed_messages_dropped, 3);
}

#[test]
fn messages_from_disposed_container_are_ignored() {
    let (controller, backend) = controller();
    let host = FakeHost::new("sidebar");
    let _sidebar = SidebarAdapter::attach(host.clone(), &controller);
    host.show();

    host.dispose();
    host.post_from_ui(json!({ "type": "stop" }));

    assert!(backend.actions().is_empty());
}

#[test]
fn dropped_adapter_stops_listening() {
    let (controller, _) = controller();
    let host = FakeHost::new("sidebar");
    drop(SidebarAdapter::attach(host.clone(), &controller));

    host.show();

    assert_eq!(controller.phase(), ControllerPhase::Uninitialized);
    assert!(host.posted().is_empty());
}
