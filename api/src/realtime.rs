//! Realtime messenger: a scoped Socket.IO chat channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat view exchanges plain text `message` events with the backend over
//! Socket.IO (Engine.IO v4, WebSocket transport). The platform supplies a
//! [`Connector`] that opens raw text-frame [`Link`]s; everything above the
//! frame level lives here.
//!
//! LIFECYCLE
//! =========
//! [`Messenger::enter`] splits into a [`ChatHandle`] (owned by the view) and a
//! [`ChatPump`] (spawned on the event loop). The pump owns the link. When the
//! handle is dropped or [`ChatHandle::leave`] is called the outgoing channel
//! closes and the release signal fires; the pump then sends a Socket.IO
//! disconnect and closes the link. A release during connect or handshake
//! aborts the attempt without waiting for the server.
//! There is no reconnection: a closed channel stays closed until the view is
//! entered again.

#[cfg(test)]
#[path = "realtime_test.rs"]
mod realtime_test;

use std::sync::Mutex;

use futures::channel::{mpsc, oneshot};
use futures::future::{self, Either};
use futures::{StreamExt, pin_mut};
use serde_json::Value;
use wire::socket::ROOT_NAMESPACE;
use wire::{EnginePacket, MESSAGE_EVENT, SocketKind, SocketPacket};

use crate::error::RealtimeError;
use crate::session::Session;

/// Engine.IO endpoint path for a direct WebSocket connection.
pub const SOCKET_PATH: &str = "/socket.io/?EIO=4&transport=websocket";

/// Convert an HTTP(S) origin into the Socket.IO WebSocket endpoint.
///
/// Returns `None` for origins that are neither `http(s)://` nor `ws(s)://`.
#[must_use]
pub fn socket_endpoint(origin: &str) -> Option<String> {
    let origin = origin.trim_end_matches('/');
    let base = if let Some(rest) = origin.strip_prefix("http://") {
        format!("ws://{rest}")
    } else if let Some(rest) = origin.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if origin.starts_with("ws://") || origin.starts_with("wss://") {
        origin.to_owned()
    } else {
        return None;
    };
    Some(format!("{base}{SOCKET_PATH}"))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Something the view should apply to its state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEvent {
    Status(ConnectionStatus),
    /// One received `message` payload, in arrival order.
    Message(String),
}

/// A connected, bidirectional text-frame transport (one WebSocket).
#[allow(async_fn_in_trait)]
pub trait Link {
    /// Send one text frame.
    ///
    /// # Errors
    ///
    /// [`RealtimeError::Transport`] or [`RealtimeError::Closed`].
    async fn send_text(&mut self, text: String) -> Result<(), RealtimeError>;

    /// Next text frame; `None` once the peer has closed. Must be cancel-safe.
    async fn recv_text(&mut self) -> Option<Result<String, RealtimeError>>;

    /// Close the underlying transport. Errors are not interesting at this point.
    async fn close(&mut self);
}

/// Opens [`Link`]s to a WebSocket URL.
#[allow(async_fn_in_trait)]
pub trait Connector {
    type Link: Link;

    /// # Errors
    ///
    /// [`RealtimeError::Transport`] when the connection cannot be established.
    async fn open(&self, url: &str) -> Result<Self::Link, RealtimeError>;
}

/// Factory for one view's chat channel.
pub struct Messenger<C> {
    connector: C,
    endpoint: String,
    session: Session,
}

impl<C: Connector> Messenger<C> {
    pub fn new(connector: C, endpoint: impl Into<String>, session: Session) -> Self {
        Self { connector, endpoint: endpoint.into(), session }
    }

    /// Acquire the channel for a view. The returned handle is the only way
    /// to send, and dropping it releases the connection.
    #[must_use]
    pub fn enter(self) -> (ChatHandle, ChatPump<C>) {
        let (tx, rx) = mpsc::unbounded();
        let (release, released) = oneshot::channel();
        let auth = self
            .session
            .token()
            .map(|token| serde_json::json!({ "token": token }));
        let pump = ChatPump {
            connector: self.connector,
            endpoint: self.endpoint,
            auth,
            outgoing: rx,
            released,
        };
        let handle = ChatHandle { outgoing: tx, release: Mutex::new(Some(release)) };
        (handle, pump)
    }
}

/// View-side end of a chat channel.
#[derive(Debug)]
pub struct ChatHandle {
    outgoing: mpsc::UnboundedSender<String>,
    release: Mutex<Option<oneshot::Sender<()>>>,
}

impl ChatHandle {
    /// Queue a message for sending.
    ///
    /// Returns `false` if the channel is already gone; the message is dropped.
    pub fn send(&self, text: &str) -> bool {
        self.outgoing.unbounded_send(text.to_owned()).is_ok()
    }

    /// Release the connection. Idempotent.
    pub fn leave(&self) {
        self.outgoing.close_channel();
        if let Ok(mut release) = self.release.lock() {
            release.take();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.outgoing.is_closed()
    }
}

impl Drop for ChatHandle {
    fn drop(&mut self) {
        self.leave();
    }
}

/// Connection driver. Runs until the handle is released or the peer closes.
pub struct ChatPump<C> {
    connector: C,
    endpoint: String,
    auth: Option<Value>,
    outgoing: mpsc::UnboundedReceiver<String>,
    released: oneshot::Receiver<()>,
}

impl<C: Connector> ChatPump<C> {
    /// Drive the channel, reporting status changes and received messages.
    ///
    /// Always reports `Connecting` first and `Disconnected` last.
    ///
    /// # Errors
    ///
    /// Returns why the channel ended when it was not released by the view:
    /// connect failure, handshake rejection, transport error or peer close.
    pub async fn run<F: FnMut(ChatEvent)>(self, mut on_event: F) -> Result<(), RealtimeError> {
        on_event(ChatEvent::Status(ConnectionStatus::Connecting));
        let result = self.drive(&mut on_event).await;
        match &result {
            Ok(()) => log::info!("chat channel released"),
            Err(e) => log::warn!("chat channel ended: {e}"),
        }
        on_event(ChatEvent::Status(ConnectionStatus::Disconnected));
        result
    }

    async fn drive<F: FnMut(ChatEvent)>(self, on_event: &mut F) -> Result<(), RealtimeError> {
        let Self { connector, endpoint, auth, mut outgoing, mut released } = self;

        let opening = connector.open(&endpoint);
        pin_mut!(opening);
        let mut link = match future::select(opening, &mut released).await {
            Either::Left((link, _)) => link?,
            Either::Right(_) => {
                log::debug!("chat channel left before the connection opened");
                return Ok(());
            }
        };

        let mut opened = false;
        let handshake_result = {
            let greeting = handshake(&mut link, auth, &mut opened);
            pin_mut!(greeting);
            match future::select(greeting, &mut released).await {
                Either::Left((result, _)) => Some(result),
                Either::Right(_) => None,
            }
        };
        match handshake_result {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                link.close().await;
                return Err(e);
            }
            None => {
                log::debug!("chat channel left during handshake");
                if opened {
                    if let Err(e) = send_socket(&mut link, &SocketPacket::disconnect()).await {
                        log::debug!("disconnect packet not delivered: {e}");
                    }
                }
                link.close().await;
                return Ok(());
            }
        }
        log::info!("chat channel connected to {endpoint}");
        on_event(ChatEvent::Status(ConnectionStatus::Connected));

        let result = pump(&mut link, &mut outgoing, on_event).await;
        link.close().await;
        result
    }
}

enum Step {
    Inbound(Option<Result<String, RealtimeError>>),
    Outbound(Option<String>),
}

enum Inbound {
    Message(String),
    Disconnect,
    Ignore,
}

async fn pump<L: Link, F: FnMut(ChatEvent)>(
    link: &mut L,
    outgoing: &mut mpsc::UnboundedReceiver<String>,
    on_event: &mut F,
) -> Result<(), RealtimeError> {
    loop {
        let step = {
            let inbound = link.recv_text();
            let outbound = outgoing.next();
            pin_mut!(inbound);
            match future::select(inbound, outbound).await {
                Either::Left((frame, _)) => Step::Inbound(frame),
                Either::Right((text, _)) => Step::Outbound(text),
            }
        };

        match step {
            Step::Outbound(Some(text)) => {
                let event = SocketPacket::event(MESSAGE_EVENT, vec![Value::String(text)]);
                send_socket(link, &event).await?;
            }
            Step::Outbound(None) => {
                if let Err(e) = send_socket(link, &SocketPacket::disconnect()).await {
                    log::debug!("disconnect packet not delivered: {e}");
                }
                return Ok(());
            }
            Step::Inbound(None) => return Err(RealtimeError::Closed),
            Step::Inbound(Some(Err(e))) => return Err(e),
            Step::Inbound(Some(Ok(text))) => match EnginePacket::decode(&text) {
                Ok(EnginePacket::Ping(payload)) => {
                    link.send_text(EnginePacket::Pong(payload).encode()).await?;
                }
                Ok(EnginePacket::Message(body)) => match classify(&body) {
                    Inbound::Message(message) => on_event(ChatEvent::Message(message)),
                    Inbound::Disconnect => return Err(RealtimeError::Closed),
                    Inbound::Ignore => {}
                },
                Ok(EnginePacket::Close) => return Err(RealtimeError::Closed),
                Ok(_) => {}
                Err(e) => log::warn!("dropping undecodable frame: {e}"),
            },
        }
    }
}

/// Wait for the Engine.IO open packet, then join the root namespace.
/// `opened` is set once the open packet has arrived.
async fn handshake<L: Link>(
    link: &mut L,
    auth: Option<Value>,
    opened: &mut bool,
) -> Result<(), RealtimeError> {
    let session = match next_packet(link).await? {
        EnginePacket::Open(session) => session,
        other => return Err(RealtimeError::Handshake(format!("{other:?}"))),
    };
    *opened = true;
    log::debug!(
        "engine session {} (ping interval {}ms, timeout {}ms)",
        session.sid,
        session.ping_interval,
        session.ping_timeout
    );

    send_socket(link, &SocketPacket::connect(auth)).await?;

    loop {
        match next_packet(link).await? {
            EnginePacket::Ping(payload) => {
                link.send_text(EnginePacket::Pong(payload).encode()).await?;
            }
            EnginePacket::Message(body) => {
                let packet = SocketPacket::decode(&body)?;
                if packet.namespace != ROOT_NAMESPACE {
                    continue;
                }
                match packet.kind {
                    SocketKind::Connect => return Ok(()),
                    SocketKind::ConnectError => {
                        return Err(RealtimeError::Rejected(packet.error_message().unwrap_or_default()));
                    }
                    _ => {}
                }
            }
            EnginePacket::Close => return Err(RealtimeError::Closed),
            _ => {}
        }
    }
}

async fn next_packet<L: Link>(link: &mut L) -> Result<EnginePacket, RealtimeError> {
    match link.recv_text().await {
        None => Err(RealtimeError::Closed),
        Some(Err(e)) => Err(e),
        Some(Ok(text)) => Ok(EnginePacket::decode(&text)?),
    }
}

async fn send_socket<L: Link>(link: &mut L, packet: &SocketPacket) -> Result<(), RealtimeError> {
    link.send_text(EnginePacket::Message(packet.encode()).encode()).await
}

fn classify(body: &str) -> Inbound {
    let packet = match SocketPacket::decode(body) {
        Ok(packet) => packet,
        Err(e) => {
            log::warn!("dropping undecodable socket packet: {e}");
            return Inbound::Ignore;
        }
    };
    if packet.namespace != ROOT_NAMESPACE {
        return Inbound::Ignore;
    }
    match packet.kind {
        SocketKind::Disconnect => Inbound::Disconnect,
        SocketKind::Event if packet.event_name() == Some(MESSAGE_EVENT) => {
            match packet.event_args().first() {
                Some(Value::String(text)) => Inbound::Message(text.clone()),
                Some(other) => Inbound::Message(other.to_string()),
                None => Inbound::Ignore,
            }
        }
        _ => Inbound::Ignore,
    }
}
