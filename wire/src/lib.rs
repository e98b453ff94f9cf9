//! Shared data model and realtime packet codec.
//!
//! This crate owns the wire representation used by both the browser app and
//! the CLI. REST bodies are plain serde structs in [`model`]; the realtime
//! channel speaks Socket.IO packets ([`socket`]) carried inside Engine.IO
//! packets ([`engine`]) over WebSocket text frames.

pub mod engine;
pub mod model;
pub mod socket;

pub use engine::{EnginePacket, Handshake};
pub use model::{AnalyticsSnapshot, Author, Credentials, Notification, Post, Profile, Registration, TokenGrant};
pub use socket::{SocketKind, SocketPacket};

/// Name of the only event carried by the chat channel, in both directions.
pub const MESSAGE_EVENT: &str = "message";

/// Error returned when decoding Engine.IO or Socket.IO packets.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The frame carried no packet type.
    #[error("empty packet")]
    Empty,
    /// The leading type digit is not a known packet type.
    #[error("unknown packet type: {0:?}")]
    UnknownType(char),
    /// The open packet's handshake JSON could not be parsed.
    #[error("invalid handshake: {0}")]
    Handshake(serde_json::Error),
    /// Ack ids must fit in a `u64`.
    #[error("invalid ack id in {0:?}")]
    AckId(String),
    /// Binary attachments are not supported on this channel.
    #[error("binary attachments are not supported")]
    Binary,
    /// The JSON payload after the header could not be parsed.
    #[error("invalid packet payload: {0}")]
    Payload(serde_json::Error),
}
