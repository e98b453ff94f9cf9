//! Error types for HTTP calls, token storage and the realtime channel.
//!
//! User-facing behavior collapses all of these into one notice (auth forms)
//! or a silent stall (data views); the variants exist so logs name the cause.

/// Failure reading or writing the persisted session token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("token storage failed: {0}")]
    Storage(String),
}

/// Failure of a REST call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("invalid request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// Login succeeded at the HTTP level but carried no usable token.
    #[error("login response carried no token")]
    MissingToken,
    #[error(transparent)]
    Session(#[from] SessionError),
    /// HTTP is not available in this build (e.g. a non-browser build of the app).
    #[error("http transport unavailable")]
    Unavailable,
}

/// Failure on the realtime channel.
#[derive(Debug, thiserror::Error)]
pub enum RealtimeError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("connection closed")]
    Closed,
    /// The peer sent something other than the expected handshake packet.
    #[error("unexpected handshake packet: {0}")]
    Handshake(String),
    /// The server refused the Socket.IO connect.
    #[error("connection rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Codec(#[from] wire::CodecError),
}
