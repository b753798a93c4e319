use crate::errors::TetherResult;
use crate::models::UiAction;

/// The assistant backend as seen by the bridge.
///
/// `forward` only hands the action over; the backend's answer arrives later as
/// an independent [`crate::models::BackendEvent`]. An `Err` means the action
/// was not accepted at all.
pub trait IBackend: Send + Sync {
    fn forward(&self, action: &UiAction) -> TetherResult<()>;
}
