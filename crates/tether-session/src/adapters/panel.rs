use std::sync::Arc;

use tracing::debug;

use tether_core::models::{ContainerKind, OutboundMessage};
use tether_core::traits::{IContainerAdapter, IHostContainer, MessageHandler};

use super::{wire, AdapterCore, HasCore};
use crate::controller::SessionPanelController;

/// Adapter for the floating editor-area panel.
pub struct PanelAdapter {
    core: AdapterCore,
}

impl PanelAdapter {
    /// Wrap a panel and subscribe to its notifications.
    ///
    /// With `reveal` the panel was just created in the foreground. The host
    /// fires no view-state event for that first showing, so it binds here.
    pub fn attach(
        host: Arc<dyn IHostContainer>,
        controller: &Arc<SessionPanelController>,
        reveal: bool,
    ) -> Arc<Self> {
        let adapter = Arc::new(Self {
            core: AdapterCore::new(ContainerKind::Panel, host, Arc::clone(controller.metrics())),
        });
        wire(&adapter, controller);

        if reveal {
            debug!("panel revealed on open");
            adapter.core.set_visible(true);
            controller.close_other_container(ContainerKind::Panel);
            controller.bind_container(Arc::clone(&adapter) as Arc<dyn IContainerAdapter>);
        }
        adapter
    }

    pub fn is_visible(&self) -> bool {
        self.core.is_visible()
    }
}

impl HasCore for PanelAdapter {
    fn core(&self) -> &AdapterCore {
        &self.core
    }
}

impl IContainerAdapter for PanelAdapter {
    fn kind(&self) -> ContainerKind {
        self.core.kind()
    }

    fn is_alive(&self) -> bool {
        self.core.is_alive()
    }

    fn send(&self, message: &OutboundMessage) -> bool {
        self.core.send(message)
    }

    fn on_message(&self, handler: MessageHandler) {
        self.core.on_message(handler);
    }
}
