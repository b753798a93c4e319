use crate::errors::ChannelError;
use crate::models::{ContainerKind, OutboundMessage, UiAction};

/// A lifecycle notification or raw message raised by a host container.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    VisibilityChanged { visible: bool },
    Disposed,
    /// Raw payload posted by the UI; parsed by the adapter.
    Message { payload: serde_json::Value },
}

/// Callback the host invokes for every [`HostEvent`] on one container.
pub type HostListener = Box<dyn Fn(HostEvent) + Send + Sync>;

/// Callback receiving parsed UI actions from a container.
pub type MessageHandler = Box<dyn Fn(UiAction) + Send + Sync>;

/// The minimal host contract for one UI-hosting surface.
///
/// The bridge never calls host APIs beyond posting a message and subscribing to
/// the container's notifications.
pub trait IHostContainer: Send + Sync {
    /// Write a payload to the container's message channel.
    fn post_message(&self, payload: &serde_json::Value) -> Result<(), ChannelError>;

    /// Register for visibility, disposal and inbound message notifications.
    fn subscribe(&self, listener: HostListener);
}

/// The controller's view of a bound UI container.
///
/// Implementations are pure translation layers: they forward host lifecycle
/// events to the controller and carry messages losslessly in both directions.
pub trait IContainerAdapter: Send + Sync {
    fn kind(&self) -> ContainerKind;

    /// False once the host has disposed the container.
    fn is_alive(&self) -> bool;

    /// Deliver a delta if the container is alive. Returns whether it was written.
    fn send(&self, message: &OutboundMessage) -> bool;

    /// Subscribe to actions posted by the UI in this container.
    fn on_message(&self, handler: MessageHandler);
}
