use std::sync::Arc;

use tether_core::models::{ContainerKind, OutboundMessage};
use tether_core::traits::{IContainerAdapter, IHostContainer, MessageHandler};

use super::{wire, AdapterCore, HasCore};
use crate::controller::SessionPanelController;

/// Adapter for the docked sidebar view.
///
/// The host creates the view lazily; it binds the first time the host reports
/// it visible.
pub struct SidebarAdapter {
    core: AdapterCore,
}

impl SidebarAdapter {
    /// Wrap a resolved sidebar view and subscribe to its notifications.
    pub fn attach(
        host: Arc<dyn IHostContainer>,
        controller: &Arc<SessionPanelController>,
    ) -> Arc<Self> {
        let adapter = Arc::new(Self {
            core: AdapterCore::new(
                ContainerKind::Sidebar,
                host,
                Arc::clone(controller.metrics()),
            ),
        });
        wire(&adapter, controller);
        adapter
    }

    pub fn is_visible(&self) -> bool {
        self.core.is_visible()
    }
}

impl HasCore for SidebarAdapter {
    fn core(&self) -> &AdapterCore {
        &self.core
    }
}

impl IContainerAdapter for SidebarAdapter {
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
