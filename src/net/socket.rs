//! Browser WebSocket links for the realtime messenger.

#![allow(clippy::unused_async)]

use api::{Connector, RealtimeError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConnector;

#[cfg(feature = "csr")]
pub struct BrowserLink {
    ws: gloo_net::websocket::futures::WebSocket,
}

#[cfg(feature = "csr")]
impl Connector for BrowserConnector {
    type Link = BrowserLink;

    async fn open(&self, url: &str) -> Result<BrowserLink, RealtimeError> {
        let ws = gloo_net::websocket::futures::WebSocket::open(url)
            .map_err(|e| RealtimeError::Transport(e.to_string()))?;
        Ok(BrowserLink { ws })
    }
}

#[cfg(feature = "csr")]
impl api::Link for BrowserLink {
    async fn send_text(&mut self, text: String) -> Result<(), RealtimeError> {
        use futures::SinkExt;
        use gloo_net::websocket::Message;

        self.ws
            .send(Message::Text(text))
            .await
            .map_err(|e| RealtimeError::Transport(e.to_string()))
    }

    async fn recv_text(&mut self) -> Option<Result<String, RealtimeError>> {
        use futures::StreamExt;
        use gloo_net::websocket::{Message, WebSocketError};

        loop {
            match self.ws.next().await? {
                Ok(Message::Text(text)) => return Some(Ok(text)),
                Ok(Message::Bytes(_)) => {}
                Err(WebSocketError::ConnectionClose(_)) => return None,
                Err(e) => return Some(Err(RealtimeError::Transport(e.to_string()))),
            }
        }
    }

    async fn close(&mut self) {
        let _ = futures::SinkExt::close(&mut self.ws).await;
    }
}

/// Uninhabited outside the browser: [`BrowserConnector::open`] always fails.
#[cfg(not(feature = "csr"))]
pub enum BrowserLink {}

#[cfg(not(feature = "csr"))]
impl Connector for BrowserConnector {
    type Link = BrowserLink;

    async fn open(&self, url: &str) -> Result<BrowserLink, RealtimeError> {
        Err(RealtimeError::Transport(format!("websocket unavailable for {url}")))
    }
}

#[cfg(not(feature = "csr"))]
impl api::Link for BrowserLink {
    async fn send_text(&mut self, _text: String) -> Result<(), RealtimeError> {
        match *self {}
    }

    async fn recv_text(&mut self) -> Option<Result<String, RealtimeError>> {
        match *self {}
    }

    async fn close(&mut self) {
        match *self {}
    }
}
