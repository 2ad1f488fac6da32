/// Failure of a remote session request.
///
/// The session reports failures as a user-displayable message with no
/// structured error code. Presenters forward the message to the host's
/// [`Notifier`](crate::Notifier) and otherwise keep their pre-request state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The user-displayable message carried by the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}
