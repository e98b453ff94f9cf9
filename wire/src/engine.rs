//! Engine.IO v4 packets over the WebSocket transport.
//!
//! Each WebSocket text frame carries exactly one packet: a type digit
//! followed by an optional payload. Polling-transport batching is never used
//! because the channel connects with `transport=websocket` directly.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};

use crate::CodecError;

/// Handshake sent by the server in the open packet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub upgrades: Vec<String>,
    #[serde(default)]
    pub ping_interval: u64,
    #[serde(default)]
    pub ping_timeout: u64,
    #[serde(default)]
    pub max_payload: u64,
}

/// A single Engine.IO packet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnginePacket {
    Open(Handshake),
    Close,
    /// Server heartbeat; the optional payload must be echoed in the pong.
    Ping(Option<String>),
    Pong(Option<String>),
    /// Application payload, here always a Socket.IO packet.
    Message(String),
    Upgrade,
    Noop,
}

impl EnginePacket {
    fn type_char(&self) -> char {
        match self {
            Self::Open(_) => '0',
            Self::Close => '1',
            Self::Ping(_) => '2',
            Self::Pong(_) => '3',
            Self::Message(_) => '4',
            Self::Upgrade => '5',
            Self::Noop => '6',
        }
    }

    /// Encode into the text of one WebSocket frame.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        out.push(self.type_char());
        match self {
            Self::Open(handshake) => {
                out.push_str(&serde_json::to_string(handshake).unwrap_or_default());
            }
            Self::Ping(Some(payload)) | Self::Pong(Some(payload)) | Self::Message(payload) => {
                out.push_str(payload);
            }
            _ => {}
        }
        out
    }

    /// Decode the text of one WebSocket frame.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Empty`] for an empty frame,
    /// [`CodecError::UnknownType`] for an unrecognized type digit and
    /// [`CodecError::Handshake`] when the open packet's JSON is malformed.
    pub fn decode(text: &str) -> Result<Self, CodecError> {
        let mut chars = text.chars();
        let kind = chars.next().ok_or(CodecError::Empty)?;
        let rest = chars.as_str();
        let payload = (!rest.is_empty()).then(|| rest.to_owned());

        match kind {
            '0' => serde_json::from_str(rest)
                .map(Self::Open)
                .map_err(CodecError::Handshake),
            '1' => Ok(Self::Close),
            '2' => Ok(Self::Ping(payload)),
            '3' => Ok(Self::Pong(payload)),
            '4' => Ok(Self::Message(rest.to_owned())),
            '5' => Ok(Self::Upgrade),
            '6' => Ok(Self::Noop),
            other => Err(CodecError::UnknownType(other)),
        }
    }
}
