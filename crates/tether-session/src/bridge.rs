//! BridgeRuntime: one activation's controller wired to host-polled queues.
//!
//! Hosts that cannot call into Rust synchronously (the Node binding) push host
//! notifications in and drain outbound payloads out. [`OutboxHost`] stands in
//! for a container's message channel and [`QueuedBackend`] for the backend's
//! input; both are plain queues the host polls.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use tether_core::config::TetherConfig;
use tether_core::constants::BACKEND_QUEUE_MAX;
use tether_core::errors::{BackendError, ChannelError, TetherError, TetherResult};
use tether_core::models::{BackendEvent, ContainerKind, SessionSnapshot, UiAction};
use tether_core::traits::{HostEvent, HostListener, IBackend, IContainerAdapter, IHostContainer};
use tether_observability::MetricsSnapshot;
use tether_ratelimit::RateLimitCache;

use crate::adapters::{PanelAdapter, SidebarAdapter};
use crate::controller::SessionPanelController;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

type SharedListener = Arc<dyn Fn(HostEvent) + Send + Sync>;

/// A container channel whose posts accumulate until the host drains them.
pub struct OutboxHost {
    kind: ContainerKind,
    outbox: Mutex<VecDeque<Value>>,
    listeners: Mutex<Vec<SharedListener>>,
    disposed: AtomicBool,
}

impl OutboxHost {
    pub fn new(kind: ContainerKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            outbox: Mutex::new(VecDeque::new()),
            listeners: Mutex::new(Vec::new()),
            disposed: AtomicBool::new(false),
        })
    }

    /// Deliver a host notification to the subscribed adapter.
    pub fn emit(&self, event: HostEvent) {
        if matches!(event, HostEvent::Disposed) {
            self.disposed.store(true, Ordering::Release);
        }
        let listeners: Vec<SharedListener> = lock(&self.listeners).clone();
        for listener in listeners {
            listener(event.clone());
        }
    }

    /// Take every payload posted since the last drain, oldest first.
    pub fn drain(&self) -> Vec<Value> {
        lock(&self.outbox).drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        lock(&self.outbox).len()
    }
}

impl IHostContainer for OutboxHost {
    fn post_message(&self, payload: &Value) -> Result<(), ChannelError> {
        if self.disposed.load(Ordering::Acquire) {
            return Err(ChannelError::ContainerDisposed {
                kind: self.kind.to_string(),
            });
        }
        lock(&self.outbox).push_back(payload.clone());
        Ok(())
    }

    fn subscribe(&self, listener: HostListener) {
        lock(&self.listeners).push(Arc::from(listener));
    }
}

/// Backend input as a bounded queue of forwarded actions.
pub struct QueuedBackend {
    queue: Mutex<VecDeque<UiAction>>,
    max_pending: usize,
}

impl QueuedBackend {
    pub fn new(max_pending: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            max_pending,
        }
    }

    pub fn drain(&self) -> Vec<UiAction> {
        lock(&self.queue).drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        lock(&self.queue).len()
    }
}

impl IBackend for QueuedBackend {
    fn forward(&self, action: &UiAction) -> TetherResult<()> {
        let mut queue = lock(&self.queue);
        if queue.len() >= self.max_pending {
            return Err(BackendError::QueueFull {
                pending: queue.len(),
                max: self.max_pending,
            }
            .into());
        }
        queue.push_back(action.clone());
        Ok(())
    }
}

/// A live container: its channel and the adapter subscribed to it.
struct Mounted {
    host: Arc<OutboxHost>,
    _adapter: Arc<dyn IContainerAdapter>,
}

/// The controller of one activation plus the queues the host polls.
pub struct BridgeRuntime {
    controller: Arc<SessionPanelController>,
    backend: Arc<QueuedBackend>,
    mounts: Mutex<HashMap<ContainerKind, Mounted>>,
}

impl BridgeRuntime {
    /// Build from config. A cached rate-limit snapshot is seeded so the first
    /// container can show it before the backend reports.
    pub fn new(config: TetherConfig) -> Self {
        let backend = Arc::new(QueuedBackend::new(BACKEND_QUEUE_MAX));
        let cache = RateLimitCache::from_config(&config.rate_limit);
        let max_age = Duration::from_secs(config.rate_limit.max_age_secs);

        let mut controller = SessionPanelController::new(config, backend.clone());
        let mut cached = None;
        if let Some(cache) = cache {
            cached = cache.load();
            controller = controller.with_rate_limit_cache(cache);
        }
        let controller = Arc::new(controller);

        if let Some(snapshot) = cached {
            if !RateLimitCache::is_fresh(&snapshot, max_age) {
                info!(timestamp = snapshot.timestamp, "cached rate limits are stale");
            }
            controller.seed_rate_limits(snapshot);
        }

        Self {
            controller,
            backend,
            mounts: Mutex::new(HashMap::new()),
        }
    }

    /// Parse optional TOML, apply environment overrides and build.
    pub fn from_toml(config_toml: Option<&str>) -> TetherResult<Self> {
        Self::load_config(config_toml).map(Self::new)
    }

    /// Parse optional TOML and apply `TETHER_*` environment overrides.
    pub fn load_config(config_toml: Option<&str>) -> TetherResult<TetherConfig> {
        let mut config = match config_toml {
            Some(toml_str) => TetherConfig::from_toml(toml_str)?,
            None => TetherConfig::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn controller(&self) -> &Arc<SessionPanelController> {
        &self.controller
    }

    /// Create the floating panel. With `reveal` it binds right away.
    pub fn open_panel(&self, reveal: bool) -> TetherResult<()> {
        self.ensure_live()?;
        self.mount(ContainerKind::Panel, reveal);
        Ok(())
    }

    /// Forward a host visibility change, creating the container on first show.
    pub fn notify_visibility(&self, kind: ContainerKind, visible: bool) -> TetherResult<()> {
        self.ensure_live()?;
        let host = match self.host(kind) {
            Some(host) => host,
            None if visible => self.mount(kind, false),
            None => return Ok(()),
        };
        host.emit(HostEvent::VisibilityChanged { visible });
        Ok(())
    }

    /// Forward a host disposal. The next show of `kind` creates a new container.
    pub fn notify_disposed(&self, kind: ContainerKind) {
        let mounted = lock(&self.mounts).remove(&kind);
        if let Some(mounted) = mounted {
            mounted.host.emit(HostEvent::Disposed);
            debug!(%kind, dropped = mounted.host.pending(), "container unmounted");
        }
    }

    /// Deliver a raw payload posted by the UI in `kind`.
    pub fn post_from_ui(&self, kind: ContainerKind, payload: Value) -> TetherResult<()> {
        self.ensure_live()?;
        let host = self.host(kind).ok_or_else(|| ChannelError::ContainerDisposed {
            kind: kind.to_string(),
        })?;
        host.emit(HostEvent::Message { payload });
        Ok(())
    }

    /// Payloads waiting for the UI in `kind`; empty when it is not mounted.
    pub fn drain_ui(&self, kind: ContainerKind) -> Vec<Value> {
        self.host(kind).map(|host| host.drain()).unwrap_or_default()
    }

    /// Actions waiting for the backend, as wire JSON.
    pub fn drain_backend(&self) -> TetherResult<Vec<Value>> {
        self.backend
            .drain()
            .iter()
            .map(|action| serde_json::to_value(action).map_err(TetherError::from))
            .collect()
    }

    /// Apply a backend event given as wire JSON.
    pub fn push_backend_event(&self, payload: Value) -> TetherResult<()> {
        self.ensure_live()?;
        let event: BackendEvent = serde_json::from_value(payload)?;
        self.controller.relay_inbound(event);
        Ok(())
    }

    pub fn provide_virtual_document(&self, uri: &str) -> String {
        self.controller.document_provider().provide_text(uri)
    }

    pub fn virtual_document_scheme(&self) -> &str {
        self.controller.document_provider().scheme()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.controller.snapshot()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.controller.metrics().snapshot()
    }

    /// Unmount both containers and dispose the controller.
    pub fn dispose(&self) {
        self.controller.dispose();
        for kind in ContainerKind::ALL {
            self.notify_disposed(kind);
        }
    }

    fn ensure_live(&self) -> TetherResult<()> {
        if self.controller.is_disposed() {
            return Err(TetherError::Disposed);
        }
        Ok(())
    }

    fn host(&self, kind: ContainerKind) -> Option<Arc<OutboxHost>> {
        lock(&self.mounts).get(&kind).map(|m| Arc::clone(&m.host))
    }

    /// Replace any container of `kind` with a fresh one.
    fn mount(&self, kind: ContainerKind, reveal: bool) -> Arc<OutboxHost> {
        self.notify_disposed(kind);

        let host = OutboxHost::new(kind);
        let adapter: Arc<dyn IContainerAdapter> = match kind {
            ContainerKind::Sidebar => SidebarAdapter::attach(host.clone(), &self.controller),
            ContainerKind::Panel => PanelAdapter::attach(host.clone(), &self.controller, reveal),
        };
        lock(&self.mounts).insert(
            kind,
            Mounted {
                host: Arc::clone(&host),
                _adapter: adapter,
            },
        );
        host
    }
}
