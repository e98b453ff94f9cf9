//! Shared fixtures for unit tests: a scripted HTTP transport and an
//! in-memory realtime link.

use std::sync::{Arc, Mutex};

use futures::StreamExt;
use futures::channel::mpsc;

use crate::error::{ApiError, RealtimeError};
use crate::realtime::{Connector, Link};
use crate::request::{ApiRequest, ApiResponse, Method, Transport};

pub const BASE: &str = "http://backend.test/api";

/// Transport answering from a fixed route table and recording every request.
#[derive(Clone, Default)]
pub struct StubTransport {
    routes: Arc<Mutex<Vec<(Method, String, ApiResponse)>>>,
    seen: Arc<Mutex<Vec<ApiRequest>>>,
}

impl StubTransport {
    pub fn respond(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.routes.lock().expect("routes").push((
            method,
            format!("{BASE}{path}"),
            ApiResponse { status, body: body.to_owned() },
        ));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().expect("seen").clone()
    }
}

impl Transport for StubTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.seen.lock().expect("seen").push(request.clone());
        self.routes
            .lock()
            .expect("routes")
            .iter()
            .find(|(method, url, _)| *method == request.method && *url == request.url)
            .map(|(_, _, response)| response.clone())
            .ok_or_else(|| ApiError::Network(format!("no route for {}", request.url)))
    }
}

/// Server side of a [`MemoryLink`]: frames pushed here arrive at the client,
/// frames the client sends are collected in `sent`.
pub struct MemoryPeer {
    pub to_client: mpsc::UnboundedSender<String>,
    pub sent: Arc<Mutex<Vec<String>>>,
    pub closed: Arc<Mutex<bool>>,
}

impl MemoryPeer {
    pub fn push(&self, frame: &str) {
        self.to_client.unbounded_send(frame.to_owned()).expect("client gone");
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().expect("sent").clone()
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.lock().expect("closed")
    }
}

pub struct MemoryLink {
    from_peer: mpsc::UnboundedReceiver<String>,
    sent: Arc<Mutex<Vec<String>>>,
    closed: Arc<Mutex<bool>>,
}

pub fn memory_link() -> (MemoryLink, MemoryPeer) {
    let (to_client, from_peer) = mpsc::unbounded();
    let sent = Arc::new(Mutex::new(Vec::new()));
    let closed = Arc::new(Mutex::new(false));
    (
        MemoryLink { from_peer, sent: sent.clone(), closed: closed.clone() },
        MemoryPeer { to_client, sent, closed },
    )
}

impl Link for MemoryLink {
    async fn send_text(&mut self, text: String) -> Result<(), RealtimeError> {
        if *self.closed.lock().expect("closed") {
            return Err(RealtimeError::Closed);
        }
        self.sent.lock().expect("sent").push(text);
        Ok(())
    }

    async fn recv_text(&mut self) -> Option<Result<String, RealtimeError>> {
        self.from_peer.next().await.map(Ok)
    }

    async fn close(&mut self) {
        *self.closed.lock().expect("closed") = true;
    }
}

/// Connector that hands out one prepared link and records the URL it was asked for.
pub struct OnceConnector {
    link: Mutex<Option<MemoryLink>>,
    pub urls: Arc<Mutex<Vec<String>>>,
}

impl OnceConnector {
    pub fn new(link: MemoryLink) -> Self {
        Self { link: Mutex::new(Some(link)), urls: Arc::default() }
    }

    pub fn refusing() -> Self {
        Self { link: Mutex::new(None), urls: Arc::default() }
    }
}

impl Connector for OnceConnector {
    type Link = MemoryLink;

    async fn open(&self, url: &str) -> Result<MemoryLink, RealtimeError> {
        self.urls.lock().expect("urls").push(url.to_owned());
        self.link
            .lock()
            .expect("link")
            .take()
            .ok_or_else(|| RealtimeError::Transport("connection refused".to_owned()))
    }
}

/// Connector whose connection attempt never completes.
pub struct StalledConnector;

impl Connector for StalledConnector {
    type Link = MemoryLink;

    async fn open(&self, _url: &str) -> Result<MemoryLink, RealtimeError> {
        futures::future::pending().await
    }
}
