use thiserror::Error;
use thrive_api::ApiError;

#[derive(Debug, Error)]
pub enum ChatError {
    /// `initialize` is only legal from the `Uninitialized` phase.
    #[error("chat session already initialized")]
    AlreadyInitialized,

    #[error("chat session is not ready")]
    NotReady,

    #[error("cannot send an empty message")]
    BlankMessage,

    #[error("a send is already in flight")]
    SendInFlight,

    /// Non-fatal: the page stays usable over REST when the realtime channel
    /// fails to attach.
    #[error("realtime subscription failed: {0}")]
    Subscribe(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
