//! Container adapters: thin translators between a host container and the
//! controller.
//!
//! Both adapters share [`AdapterCore`] for the channel plumbing and differ only
//! in how they come to be shown. Host listeners hold weak references to the
//! adapter and the controller; the controller holds the only strong reference
//! to a bound adapter besides its owner.

mod panel;
mod sidebar;

pub use panel::PanelAdapter;
pub use sidebar::SidebarAdapter;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use tracing::{debug, warn};

use tether_core::errors::ChannelError;
use tether_core::models::{ContainerKind, OutboundMessage, UiAction};
use tether_core::traits::{HostEvent, IContainerAdapter, IHostContainer, MessageHandler};
use tether_observability::BridgeMetrics;

use crate::controller::SessionPanelController;

type SharedHandler = Arc<dyn Fn(UiAction) + Send + Sync>;

/// Channel state shared by both adapter kinds.
pub(crate) struct AdapterCore {
    kind: ContainerKind,
    host: Arc<dyn IHostContainer>,
    alive: AtomicBool,
    visible: AtomicBool,
    handlers: Mutex<Vec<SharedHandler>>,
    metrics: Arc<BridgeMetrics>,
}

impl AdapterCore {
    pub(crate) fn new(
        kind: ContainerKind,
        host: Arc<dyn IHostContainer>,
        metrics: Arc<BridgeMetrics>,
    ) -> Self {
        Self {
            kind,
            host,
            alive: AtomicBool::new(true),
            visible: AtomicBool::new(false),
            handlers: Mutex::new(Vec::new()),
            metrics,
        }
    }

    pub(crate) fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }

    pub(crate) fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::Release);
    }

    fn mark_disposed(&self) {
        self.alive.store(false, Ordering::Release);
        self.visible.store(false, Ordering::Release);
    }

    pub(crate) fn send(&self, message: &OutboundMessage) -> bool {
        if !self.is_alive() {
            debug!(kind = %self.kind, message = message.name(), "send to disposed container skipped");
            return false;
        }
        let payload = match serde_json::to_value(message) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(kind = %self.kind, error = %e, "failed to encode outbound message");
                return false;
            }
        };
        match self.host.post_message(&payload) {
            Ok(()) => true,
            Err(ChannelError::ContainerDisposed { .. }) => {
                // The host knew before we did.
                self.mark_disposed();
                false
            }
            Err(e) => {
                warn!(kind = %self.kind, error = %e, "post to container failed");
                false
            }
        }
    }

    pub(crate) fn on_message(&self, handler: MessageHandler) {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::from(handler));
    }

    /// Parse a raw UI payload and hand it to every handler.
    fn dispatch(&self, payload: serde_json::Value) {
        if !self.is_alive() {
            return;
        }
        let action: UiAction = match serde_json::from_value(payload) {
            Ok(action) => action,
            Err(e) => {
                let error = ChannelError::MalformedMessage {
                    kind: self.kind.to_string(),
                    reason: e.to_string(),
                };
                warn!(error = %error, "dropping malformed UI message");
                self.metrics.record_malformed_message();
                return;
            }
        };
        let handlers: Vec<SharedHandler> = self
            .handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for handler in handlers {
            handler(action.clone());
        }
    }
}

/// Access to the shared core, implemented by both adapters.
pub(crate) trait HasCore: IContainerAdapter + 'static {
    fn core(&self) -> &AdapterCore;
}

/// Subscribe `adapter` to its host container and route parsed actions to the
/// controller.
pub(crate) fn wire<A: HasCore>(adapter: &Arc<A>, controller: &Arc<SessionPanelController>) {
    let kind = adapter.core().kind();

    let relay_to = Arc::downgrade(controller);
    adapter.on_message(Box::new(move |action| {
        if let Some(controller) = relay_to.upgrade() {
            controller.relay_outbound(kind, action);
        }
    }));

    let weak_adapter: Weak<A> = Arc::downgrade(adapter);
    let weak_controller = Arc::downgrade(controller);
    adapter.core().host.subscribe(Box::new(move |event| {
        let (Some(adapter), Some(controller)) = (weak_adapter.upgrade(), weak_controller.upgrade())
        else {
            return;
        };
        handle_host_event(adapter, &controller, event);
    }));
}

fn handle_host_event<A: HasCore>(
    adapter: Arc<A>,
    controller: &SessionPanelController,
    event: HostEvent,
) {
    let core = adapter.core();
    let kind = core.kind();
    match event {
        HostEvent::VisibilityChanged { visible: true } => {
            if !core.is_alive() {
                return;
            }
            core.set_visible(true);
            controller.close_other_container(kind);
            controller.bind_container(adapter);
        }
        HostEvent::VisibilityChanged { visible: false } => {
            // Hiding keeps the binding: the container still receives deltas.
            core.set_visible(false);
            debug!(%kind, "container hidden");
        }
        HostEvent::Disposed => {
            core.mark_disposed();
            controller.release_container(kind);
            debug!(%kind, "container disposed");
        }
        HostEvent::Message { payload } => core.dispatch(payload),
    }
}
