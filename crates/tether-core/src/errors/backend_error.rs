/// Failures reported by the backend collaborator for a forwarded action.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("backend queue full: {pending} pending actions (max {max})")]
    QueueFull { pending: usize, max: usize },
}
