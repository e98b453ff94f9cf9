use api::{ApiError, RealtimeError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Login or registration failed; the message is the only detail shown.
    #[error("{0}")]
    Rejected(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("chat: {0}")]
    Realtime(#[from] RealtimeError),
    #[error("invalid realtime origin: {0}")]
    InvalidOrigin(String),
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}
