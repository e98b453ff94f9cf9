//! WebSocket links for the realtime messenger, backed by `tokio-tungstenite`.

use api::{Connector, Link, RealtimeError};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

#[derive(Clone, Copy, Debug, Default)]
pub struct TungsteniteConnector;

pub struct TungsteniteLink {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl Connector for TungsteniteConnector {
    type Link = TungsteniteLink;

    async fn open(&self, url: &str) -> Result<TungsteniteLink, RealtimeError> {
        let (stream, _) = connect_async(url)
            .await
            .map_err(|e| RealtimeError::Transport(e.to_string()))?;
        tracing::debug!(%url, "websocket connected");
        Ok(TungsteniteLink { stream })
    }
}

impl Link for TungsteniteLink {
    async fn send_text(&mut self, text: String) -> Result<(), RealtimeError> {
        self.stream
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| match e {
                WsError::ConnectionClosed | WsError::AlreadyClosed => RealtimeError::Closed,
                other => RealtimeError::Transport(other.to_string()),
            })
    }

    async fn recv_text(&mut self) -> Option<Result<String, RealtimeError>> {
        loop {
            match self.stream.next().await? {
                Ok(Message::Text(text)) => return Some(Ok(text.as_str().to_owned())),
                Ok(Message::Close(_)) | Err(WsError::ConnectionClosed | WsError::AlreadyClosed) => {
                    return None;
                }
                Ok(_) => {}
                Err(e) => return Some(Err(RealtimeError::Transport(e.to_string()))),
            }
        }
    }

    async fn close(&mut self) {
        if let Err(e) = self.stream.close(None).await {
            tracing::debug!(error = %e, "websocket close");
        }
    }
}
