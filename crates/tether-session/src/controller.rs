//! SessionPanelController: the single owner of session UI state.
//!
//! Exactly zero or one container is bound at a time. Binding a container
//! deactivates whichever other container held the session and replays the full
//! state into the new one. Every mutation updates [`SessionState`] first and is
//! then pushed to whichever container is bound at push time; with nothing bound
//! the change lives only in state until the next replay.
//!
//! The internal lock is never held while calling into an adapter or the
//! backend, so a collaborator that calls back synchronously cannot deadlock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, instrument, warn};

use tether_content::{diff_id_for_entry, render_line_diff, VirtualContentRegistry, VirtualDocumentProvider};
use tether_core::config::TetherConfig;
use tether_core::models::{
    BackendEvent, ContainerKind, EntryKind, FailedAction, OutboundMessage, PermissionStatus,
    RateLimitSnapshot, SessionSnapshot, TranscriptEntry, UiAction,
};
use tether_core::traits::{IBackend, IContainerAdapter};
use tether_ledger::OptimisticLedger;
use tether_observability::{bind_span, relay_inbound_span, relay_outbound_span, BridgeMetrics};
use tether_ratelimit::RateLimitCache;

use crate::state::SessionState;

/// Lifecycle of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    /// No container has been bound since activation.
    Uninitialized,
    /// A container is bound and receives pushes.
    Bound(ContainerKind),
    /// The last bound container was disposed by the host; pushes are retained
    /// in state until the next bind.
    Unbound,
    Disposed,
}

/// What happened to an action posted by a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Handed to the backend.
    Forwarded,
    /// Fully handled by the bridge; the backend never sees it.
    HandledLocally,
    /// Came from a container that is not the bound one, or after disposal.
    Dropped,
    /// The backend refused it; optimistic effects were rolled back.
    Failed,
}

struct Binding {
    kind: ContainerKind,
    adapter: Arc<dyn IContainerAdapter>,
}

struct ControllerInner {
    state: SessionState,
    ledger: OptimisticLedger,
    binding: Option<Binding>,
    ever_bound: bool,
    disposed: bool,
}

/// Owner of session state, the optimistic ledger and the active binding.
///
/// Constructed once per activation and shared via `Arc` with both adapters.
pub struct SessionPanelController {
    inner: Mutex<ControllerInner>,
    provider: VirtualDocumentProvider,
    backend: Arc<dyn IBackend>,
    rate_limit_cache: Option<RateLimitCache>,
    metrics: Arc<BridgeMetrics>,
    config: TetherConfig,
}

impl SessionPanelController {
    pub fn new(config: TetherConfig, backend: Arc<dyn IBackend>) -> Self {
        let registry = Arc::new(VirtualContentRegistry::new());
        Self {
            inner: Mutex::new(ControllerInner {
                state: SessionState::new(),
                ledger: OptimisticLedger::new(),
                binding: None,
                ever_bound: false,
                disposed: false,
            }),
            provider: VirtualDocumentProvider::new(config.content.scheme.clone(), registry),
            backend,
            rate_limit_cache: None,
            metrics: Arc::new(BridgeMetrics::new()),
            config,
        }
    }

    /// Persist rate-limit updates to `cache`.
    pub fn with_rate_limit_cache(mut self, cache: RateLimitCache) -> Self {
        self.rate_limit_cache = Some(cache);
        self
    }

    pub fn metrics(&self) -> &Arc<BridgeMetrics> {
        &self.metrics
    }

    pub fn registry(&self) -> &Arc<VirtualContentRegistry> {
        self.provider.registry()
    }

    pub fn document_provider(&self) -> &VirtualDocumentProvider {
        &self.provider
    }

    pub fn config(&self) -> &TetherConfig {
        &self.config
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().state.snapshot()
    }

    pub fn active_kind(&self) -> Option<ContainerKind> {
        self.lock().binding.as_ref().map(|b| b.kind)
    }

    pub fn phase(&self) -> ControllerPhase {
        let inner = self.lock();
        match (&inner.binding, inner.disposed, inner.ever_bound) {
            (_, true, _) => ControllerPhase::Disposed,
            (Some(binding), false, _) => ControllerPhase::Bound(binding.kind),
            (None, false, true) => ControllerPhase::Unbound,
            (None, false, false) => ControllerPhase::Uninitialized,
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    /// Whether a user input is awaiting its echo.
    pub fn is_user_input_pending(&self) -> bool {
        self.lock().ledger.is_user_input_pending()
    }

    /// Whether a permission decision is awaiting its echo.
    pub fn is_permission_pending(&self, request_id: &str) -> bool {
        self.lock().ledger.is_permission_pending(request_id)
    }

    // --- Binding ---

    /// Bind `adapter` as the active container and replay full state into it.
    ///
    /// A different previously bound container is sent `deactivate` first.
    /// Re-binding the bound container only replays.
    pub fn bind_container(&self, adapter: Arc<dyn IContainerAdapter>) {
        let kind = adapter.kind();
        let _span = bind_span!(kind).entered();

        let (previous, snapshot) = {
            let mut inner = self.lock();
            if inner.disposed {
                warn!(%kind, "bind after dispose ignored");
                return;
            }
            let previous = inner
                .binding
                .take()
                .filter(|prev| !Arc::ptr_eq(&prev.adapter, &adapter));
            inner.binding = Some(Binding {
                kind,
                adapter: Arc::clone(&adapter),
            });
            inner.ever_bound = true;
            (previous, inner.state.snapshot())
        };

        if let Some(previous) = previous {
            self.deactivate(previous);
        }

        info!(%kind, entries = snapshot.entries.len(), "container bound, replaying state");
        adapter.send(&OutboundMessage::Replay { snapshot });
        self.metrics.record_replay();
    }

    /// Deactivate any bound container whose kind differs from `kind`.
    ///
    /// Called as soon as `kind` becomes visible, without waiting for the other
    /// container's own visibility or disposal notification. Returns whether a
    /// container was deactivated.
    pub fn close_other_container(&self, kind: ContainerKind) -> bool {
        let previous = {
            let mut inner = self.lock();
            if inner.binding.as_ref().is_some_and(|b| b.kind == kind.other()) {
                inner.binding.take()
            } else {
                None
            }
        };
        match previous {
            Some(previous) => {
                self.deactivate(previous);
                true
            }
            None => false,
        }
    }

    /// Unbind the container of `kind` after the host disposed it.
    ///
    /// Only a binding whose adapter reports itself dead is released, so a late
    /// disposal of an old panel cannot unbind a freshly opened one.
    pub fn release_container(&self, kind: ContainerKind) -> bool {
        let mut inner = self.lock();
        let releasable = inner
            .binding
            .as_ref()
            .is_some_and(|b| b.kind == kind && !b.adapter.is_alive());
        if releasable {
            inner.binding = None;
            debug!(%kind, "disposed container released; state retained for next bind");
        }
        releasable
    }

    fn deactivate(&self, previous: Binding) {
        debug!(kind = %previous.kind, "deactivating previous container");
        previous.adapter.send(&OutboundMessage::Deactivate);
        self.metrics.record_deactivation();
    }

    // --- UI → backend ---

    /// Handle an action posted by the container of kind `from`.
    pub fn relay_outbound(&self, from: ContainerKind, action: UiAction) -> RelayOutcome {
        let _span = relay_outbound_span!(from, action.name()).entered();

        let mut messages = Vec::new();
        {
            let mut inner = self.lock();
            if inner.disposed {
                return RelayOutcome::Dropped;
            }
            if inner.binding.as_ref().map(|b| b.kind) != Some(from) {
                debug!(%from, "dropping action from inactive container");
                self.metrics.record_stale_message();
                return RelayOutcome::Dropped;
            }
            self.expire_stale_markers(&mut inner);

            match &action {
                UiAction::Ready => {
                    drop(inner);
                    if self.config.session.replay_on_ready {
                        self.replay_active();
                    }
                    return RelayOutcome::HandledLocally;
                }
                UiAction::DismissDiff { diff_id } => {
                    let removed = self.registry().clear(diff_id);
                    debug!(diff_id = %diff_id, removed, "diff dismissed");
                    return RelayOutcome::HandledLocally;
                }
                UiAction::SendMessage { text } => {
                    // The UI rendered the message already: record it, don't push it.
                    inner.ledger.mark_user_input_pending();
                    inner.state.push_optimistic_user(text.clone());
                    inner.state.clear_error();
                }
                UiAction::PermissionResponse {
                    request_id,
                    decision,
                } => {
                    inner.ledger.mark_permission_pending(request_id.clone());
                    inner
                        .state
                        .set_permission_status(request_id, PermissionStatus::from(*decision));
                }
                UiAction::Stop => {}
                UiAction::NewSession => {
                    self.reset_session(&mut inner);
                    messages.push(OutboundMessage::SessionReset);
                }
            }
        }
        self.push(messages);

        self.metrics.record_action_relayed();
        match self.backend.forward(&action) {
            Ok(()) => RelayOutcome::Forwarded,
            Err(e) => {
                self.fail_action(failed_action_for(&action), e.to_string());
                RelayOutcome::Failed
            }
        }
    }

    /// Replay full state into the bound container, if any.
    pub fn replay_active(&self) -> bool {
        let (adapter, snapshot) = {
            let inner = self.lock();
            match &inner.binding {
                Some(binding) => (Arc::clone(&binding.adapter), inner.state.snapshot()),
                None => return false,
            }
        };
        adapter.send(&OutboundMessage::Replay { snapshot });
        self.metrics.record_replay();
        true
    }

    // --- backend → UI ---

    /// Apply an authoritative backend event and push the resulting delta.
    pub fn relay_inbound(&self, event: BackendEvent) {
        let _span = relay_inbound_span!(event.name()).entered();

        let mut persist = None;
        let messages = {
            let mut inner = self.lock();
            if inner.disposed {
                debug!("event after dispose ignored");
                return;
            }
            self.expire_stale_markers(&mut inner);
            self.metrics.record_event_applied();
            let inner = &mut *inner;

            match event {
                BackendEvent::UserMessage {
                    entry_id,
                    text,
                    usage,
                } => {
                    let mut out = Vec::new();
                    if inner.ledger.consume_user_input_if_pending() {
                        self.metrics.record_echo_suppressed();
                        if !inner.state.confirm_optimistic_user(&text, entry_id.clone(), true) {
                            // Echo of input whose optimistic entry was reset
                            // away; the UI still shows it, so only record it.
                            inner.state.append(user_entry(entry_id, text));
                        }
                    } else if inner.state.confirm_optimistic_user(&text, entry_id.clone(), false) {
                        // Later echo of several inputs sent under one marker.
                        self.metrics.record_echo_suppressed();
                    } else {
                        let entry = inner.state.append(user_entry(entry_id, text));
                        out.push(OutboundMessage::EntryAppended { entry });
                    }
                    if let Some(usage) = usage {
                        inner.state.set_usage(usage.clone());
                        out.push(OutboundMessage::UsageUpdated { usage });
                    }
                    out
                }
                BackendEvent::AssistantMessage {
                    entry_id,
                    text,
                    usage,
                } => {
                    let entry = inner.state.append(TranscriptEntry::with_id(
                        entry_id,
                        EntryKind::Assistant,
                        text,
                    ));
                    let mut out = vec![OutboundMessage::EntryAppended { entry }];
                    if let Some(usage) = usage {
                        inner.state.set_usage(usage.clone());
                        out.push(OutboundMessage::UsageUpdated { usage });
                    }
                    out
                }
                BackendEvent::DiffProposed {
                    entry_id,
                    path,
                    old_text,
                    new_text,
                } => {
                    let diff_id = diff_id_for_entry(&entry_id);
                    self.registry()
                        .store(diff_id.clone(), render_line_diff(&old_text, &new_text));
                    let uri = self.provider.uri_for(&diff_id);
                    let text = format!("Proposed edit to {path}");
                    let entry = inner.state.append(TranscriptEntry::with_id(
                        entry_id,
                        EntryKind::Diff { uri, path },
                        text,
                    ));
                    vec![OutboundMessage::EntryAppended { entry }]
                }
                BackendEvent::PermissionRequest {
                    request_id,
                    tool,
                    description,
                } => {
                    let entry = inner.state.append(TranscriptEntry::new(
                        EntryKind::Permission {
                            request_id,
                            tool,
                            status: PermissionStatus::Pending,
                        },
                        description,
                    ));
                    vec![OutboundMessage::EntryAppended { entry }]
                }
                BackendEvent::PermissionDecided {
                    request_id,
                    decision,
                } => {
                    let echoed = inner.ledger.consume_permission_if_pending(&request_id);
                    let updated = inner
                        .state
                        .set_permission_status(&request_id, PermissionStatus::from(decision));
                    if echoed {
                        self.metrics.record_echo_suppressed();
                        Vec::new()
                    } else {
                        updated
                            .map(|entry| OutboundMessage::EntryUpdated { entry })
                            .into_iter()
                            .collect()
                    }
                }
                BackendEvent::Usage { usage } => {
                    inner.state.set_usage(usage.clone());
                    vec![OutboundMessage::UsageUpdated { usage }]
                }
                BackendEvent::Processing { active } => {
                    inner.state.set_processing(active);
                    vec![OutboundMessage::ProcessingChanged { processing: active }]
                }
                BackendEvent::RateLimits { snapshot } => {
                    inner.state.set_rate_limits(snapshot.clone());
                    persist = Some(snapshot.clone());
                    vec![OutboundMessage::RateLimits { snapshot }]
                }
                BackendEvent::ActionFailed { action, message } => {
                    self.apply_failure(inner, &action, message)
                }
                BackendEvent::SessionReset => {
                    self.reset_session(inner);
                    vec![OutboundMessage::SessionReset]
                }
            }
        };

        if let (Some(snapshot), Some(cache)) = (persist, &self.rate_limit_cache) {
            if let Err(e) = cache.store(&snapshot) {
                warn!(error = %e, "failed to persist rate-limit cache");
            }
        }
        self.push(messages);
    }

    /// Seed rate limits read from the on-disk cache at startup.
    ///
    /// Not written back: the snapshot came from the cache.
    pub fn seed_rate_limits(&self, snapshot: RateLimitSnapshot) {
        self.lock().state.set_rate_limits(snapshot.clone());
        self.push(vec![OutboundMessage::RateLimits { snapshot }]);
    }

    // --- Failure handling ---

    /// Roll back the optimistic effects of a forwarded action the backend
    /// could not carry out, and surface the error.
    ///
    /// The matching marker is consumed immediately so it cannot swallow a later,
    /// unrelated echo.
    #[instrument(skip(self, message))]
    pub fn fail_action(&self, action: FailedAction, message: impl Into<String>) {
        let messages = {
            let mut inner = self.lock();
            if inner.disposed {
                return;
            }
            self.apply_failure(&mut inner, &action, message.into())
        };
        self.push(messages);
    }

    fn apply_failure(
        &self,
        inner: &mut ControllerInner,
        action: &FailedAction,
        message: String,
    ) -> Vec<OutboundMessage> {
        warn!(?action, %message, "backend action failed");
        self.metrics.record_backend_failure();

        let mut out = Vec::new();
        match action {
            FailedAction::UserInput => {
                inner.ledger.consume_user_input_if_pending();
                if let Some(entry_id) = inner.state.retract_optimistic_user() {
                    out.push(OutboundMessage::EntryRetracted { entry_id });
                }
            }
            FailedAction::Permission { request_id } => {
                inner.ledger.consume_permission_if_pending(request_id);
                if let Some(entry) = inner
                    .state
                    .set_permission_status(request_id, PermissionStatus::Pending)
                {
                    out.push(OutboundMessage::EntryUpdated { entry });
                }
            }
            FailedAction::Other => {}
        }

        if inner.state.processing() {
            inner.state.set_processing(false);
            out.push(OutboundMessage::ProcessingChanged { processing: false });
        }
        inner.state.set_error(message.clone());
        out.push(OutboundMessage::Error { message });
        out
    }

    // --- Teardown ---

    /// Tear down at host shutdown. Further operations are no-ops.
    pub fn dispose(&self) {
        let mut inner = self.lock();
        if inner.disposed {
            return;
        }
        inner.disposed = true;
        inner.binding = None;
        inner.ledger.clear();
        let cleared = self.registry().clear_all();
        info!(cleared, "session panel controller disposed");
    }

    // --- Internals ---

    fn lock(&self) -> MutexGuard<'_, ControllerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Session boundary: drop the conversation, its diff bodies and any markers.
    fn reset_session(&self, inner: &mut ControllerInner) {
        inner.state.reset();
        inner.ledger.clear();
        let cleared = self.registry().clear_all();
        info!(cleared, "session reset");
    }

    fn expire_stale_markers(&self, inner: &mut ControllerInner) {
        let Some(ttl) = self.config.ledger.pending_ttl() else {
            return;
        };
        let expired = inner.ledger.expire_older_than(ttl);
        if !expired.is_empty() {
            warn!(
                user_input = expired.user_input,
                permissions = ?expired.permissions,
                "optimistic markers expired without echo"
            );
            self.metrics.record_markers_expired(expired.len());
        }
    }

    /// Send to whichever container is bound now.
    fn push(&self, messages: Vec<OutboundMessage>) {
        if messages.is_empty() {
            return;
        }
        let adapter = self.lock().binding.as_ref().map(|b| Arc::clone(&b.adapter));
        let Some(adapter) = adapter else {
            debug!(count = messages.len(), "no container bound; deltas retained in state");
            return;
        };
        for message in &messages {
            if !adapter.send(message) {
                debug!(kind = %adapter.kind(), message = message.name(), "delta not delivered");
            }
        }
    }
}

fn user_entry(entry_id: Option<String>, text: String) -> TranscriptEntry {
    match entry_id {
        Some(id) => TranscriptEntry::with_id(id, EntryKind::User, text),
        None => TranscriptEntry::new(EntryKind::User, text),
    }
}

fn failed_action_for(action: &UiAction) -> FailedAction {
    match action {
        UiAction::SendMessage { .. } => FailedAction::UserInput,
        UiAction::PermissionResponse { request_id, .. } => FailedAction::Permission {
            request_id: request_id.clone(),
        },
        _ => FailedAction::Other,
    }
}
