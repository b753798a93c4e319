use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tether_core::errors::{BackendError, TetherResult};
use tether_core::models::UiAction;
use tether_core::traits::IBackend;

/// Backend double that records forwarded actions.
#[derive(Default)]
pub struct RecordingBackend {
    actions: Mutex<Vec<UiAction>>,
    unavailable: AtomicBool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every later action with `BackendError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn actions(&self) -> Vec<UiAction> {
        self.actions.lock().unwrap().clone()
    }

    pub fn action_names(&self) -> Vec<&'static str> {
        self.actions.lock().unwrap().iter().map(UiAction::name).collect()
    }
}

impl IBackend for RecordingBackend {
    fn forward(&self, action: &UiAction) -> TetherResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable {
                reason: "backend process exited".to_string(),
            }
            .into());
        }
        self.actions.lock().unwrap().push(action.clone());
        Ok(())
    }
}
