//! Socket.IO v5 packets carried inside Engine.IO message packets.
//!
//! Text form: `<type>[<attachments>-][/<nsp>,][<ackId>][<json>]`. The default
//! namespace `/` is omitted when encoding. Binary packets are rejected since
//! the chat channel only ever carries strings.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use serde_json::Value;

use crate::CodecError;

/// Default namespace.
pub const ROOT_NAMESPACE: &str = "/";

/// Socket.IO packet type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocketKind {
    Connect,
    Disconnect,
    Event,
    Ack,
    ConnectError,
    BinaryEvent,
    BinaryAck,
}

impl SocketKind {
    fn as_char(self) -> char {
        match self {
            Self::Connect => '0',
            Self::Disconnect => '1',
            Self::Event => '2',
            Self::Ack => '3',
            Self::ConnectError => '4',
            Self::BinaryEvent => '5',
            Self::BinaryAck => '6',
        }
    }

    fn from_char(c: char) -> Result<Self, CodecError> {
        match c {
            '0' => Ok(Self::Connect),
            '1' => Ok(Self::Disconnect),
            '2' => Ok(Self::Event),
            '3' => Ok(Self::Ack),
            '4' => Ok(Self::ConnectError),
            '5' => Ok(Self::BinaryEvent),
            '6' => Ok(Self::BinaryAck),
            other => Err(CodecError::UnknownType(other)),
        }
    }
}

/// A decoded Socket.IO packet.
#[derive(Clone, Debug, PartialEq)]
pub struct SocketPacket {
    pub kind: SocketKind,
    pub namespace: String,
    pub ack_id: Option<u64>,
    pub data: Option<Value>,
}

impl SocketPacket {
    fn new(kind: SocketKind, data: Option<Value>) -> Self {
        Self { kind, namespace: ROOT_NAMESPACE.to_owned(), ack_id: None, data }
    }

    /// Connect to the default namespace, optionally with an auth payload.
    #[must_use]
    pub fn connect(auth: Option<Value>) -> Self {
        Self::new(SocketKind::Connect, auth)
    }

    /// Leave the default namespace.
    #[must_use]
    pub fn disconnect() -> Self {
        Self::new(SocketKind::Disconnect, None)
    }

    /// Emit `name` with the given arguments on the default namespace.
    #[must_use]
    pub fn event(name: &str, args: Vec<Value>) -> Self {
        let mut items = Vec::with_capacity(args.len() + 1);
        items.push(Value::String(name.to_owned()));
        items.extend(args);
        Self::new(SocketKind::Event, Some(Value::Array(items)))
    }

    /// Event name, when this is an event packet with a well-formed array.
    #[must_use]
    pub fn event_name(&self) -> Option<&str> {
        if self.kind != SocketKind::Event {
            return None;
        }
        self.data.as_ref()?.as_array()?.first()?.as_str()
    }

    /// Event arguments following the name.
    #[must_use]
    pub fn event_args(&self) -> &[Value] {
        if self.event_name().is_none() {
            return &[];
        }
        self.data
            .as_ref()
            .and_then(Value::as_array)
            .map_or(&[], |items| &items[1..])
    }

    /// Human-readable reason carried by a connect error packet.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        if self.kind != SocketKind::ConnectError {
            return None;
        }
        let data = self.data.as_ref()?;
        data.get("message")
            .and_then(Value::as_str)
            .or_else(|| data.as_str())
            .map(ToOwned::to_owned)
            .or_else(|| Some(data.to_string()))
    }

    /// Encode into the payload of an Engine.IO message packet.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        out.push(self.kind.as_char());
        if self.namespace != ROOT_NAMESPACE && !self.namespace.is_empty() {
            out.push_str(&self.namespace);
            out.push(',');
        }
        if let Some(id) = self.ack_id {
            out.push_str(&id.to_string());
        }
        if let Some(data) = &self.data {
            out.push_str(&data.to_string());
        }
        out
    }

    /// Decode the payload of an Engine.IO message packet.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Empty`], [`CodecError::UnknownType`],
    /// [`CodecError::Binary`] for attachment packets, [`CodecError::AckId`]
    /// for an out-of-range ack id and [`CodecError::Payload`] when the JSON
    /// body is malformed.
    pub fn decode(text: &str) -> Result<Self, CodecError> {
        let mut chars = text.chars();
        let kind = SocketKind::from_char(chars.next().ok_or(CodecError::Empty)?)?;
        if matches!(kind, SocketKind::BinaryEvent | SocketKind::BinaryAck) {
            return Err(CodecError::Binary);
        }
        let mut rest = chars.as_str();

        let namespace = if rest.starts_with('/') {
            let end = rest.find(',').unwrap_or(rest.len());
            let namespace = rest[..end].to_owned();
            rest = rest.get(end + 1..).unwrap_or("");
            namespace
        } else {
            ROOT_NAMESPACE.to_owned()
        };

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let ack_id = if digits > 0 {
            let id = rest[..digits]
                .parse::<u64>()
                .map_err(|_| CodecError::AckId(text.to_owned()))?;
            rest = &rest[digits..];
            Some(id)
        } else {
            None
        };

        let data = if rest.is_empty() {
            None
        } else {
            Some(serde_json::from_str::<Value>(rest).map_err(CodecError::Payload)?)
        };

        Ok(Self { kind, namespace, ack_id, data })
    }
}
