/// Failures writing to or reading from a host container's message channel.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("{kind} container has been disposed")]
    ContainerDisposed { kind: String },

    #[error("failed to post message to {kind} container: {reason}")]
    PostFailed { kind: String, reason: String },

    #[error("malformed message from {kind} container: {reason}")]
    MalformedMessage { kind: String, reason: String },
}
