use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use tether_core::errors::ChannelError;
use tether_core::models::OutboundMessage;
use tether_core::traits::{HostEvent, HostListener, IHostContainer};

type SharedListener = Arc<dyn Fn(HostEvent) + Send + Sync>;

/// Ordered record of posts across several hosts, as `"<label>:<type>"`.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, label: &str, payload: &Value) {
        let ty = payload["type"].as_str().unwrap_or("?");
        self.0.lock().unwrap().push(format!("{label}:{ty}"));
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// In-memory host container.
pub struct FakeHost {
    label: String,
    posted: Mutex<Vec<Value>>,
    listeners: Mutex<Vec<SharedListener>>,
    failing: AtomicBool,
    disposed: AtomicBool,
    log: Option<EventLog>,
}

impl FakeHost {
    pub fn new(label: &str) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            posted: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
            log: None,
        })
    }

    /// A host that also appends its posts to a shared log.
    pub fn with_log(label: &str, log: &EventLog) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            posted: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
            log: Some(log.clone()),
        })
    }

    /// Fire a host notification at every subscriber.
    pub fn emit(&self, event: HostEvent) {
        // Listeners may post back into this host.
        let listeners: Vec<SharedListener> = self.listeners.lock().unwrap().clone();
        for listener in listeners {
            listener(event.clone());
        }
    }

    pub fn show(&self) {
        self.emit(HostEvent::VisibilityChanged { visible: true });
    }

    pub fn hide(&self) {
        self.emit(HostEvent::VisibilityChanged { visible: false });
    }

    /// Tear the container down. Later posts fail with `ContainerDisposed`.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
        self.emit(HostEvent::Disposed);
    }

    /// Deliver a raw payload as if the UI had posted it.
    pub fn post_from_ui(&self, payload: Value) {
        self.emit(HostEvent::Message { payload });
    }

    /// Make every later post fail with `PostFailed`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    pub fn posted(&self) -> Vec<Value> {
        self.posted.lock().unwrap().clone()
    }

    pub fn posted_messages(&self) -> Vec<OutboundMessage> {
        self.posted()
            .into_iter()
            .map(|v| serde_json::from_value(v).expect("posted payload is an OutboundMessage"))
            .collect()
    }

    /// The `"type"` tag of every posted payload, in order.
    pub fn posted_types(&self) -> Vec<String> {
        self.posted()
            .iter()
            .map(|v| v["type"].as_str().unwrap_or("?").to_string())
            .collect()
    }

    pub fn clear_posted(&self) {
        self.posted.lock().unwrap().clear();
    }
}

impl IHostContainer for FakeHost {
    fn post_message(&self, payload: &Value) -> Result<(), ChannelError> {
        if self.disposed.load(Ordering::SeqCst) {
            return Err(ChannelError::ContainerDisposed {
                kind: self.label.clone(),
            });
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ChannelError::PostFailed {
                kind: self.label.clone(),
                reason: "injected failure".to_string(),
            });
        }
        if let Some(log) = &self.log {
            log.record(&self.label, payload);
        }
        self.posted.lock().unwrap().push(payload.clone());
        Ok(())
    }

    fn subscribe(&self, listener: HostListener) {
        self.listeners.lock().unwrap().push(Arc::from(listener));
    }
}
