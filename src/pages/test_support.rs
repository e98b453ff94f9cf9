//! Scripted HTTP backend for page-level tests.

use std::sync::{Arc, Mutex};

use api::{ApiClient, ApiError, ApiRequest, ApiResponse, MemoryTokenStore, Session, Transport};

pub const BASE: &str = "http://backend.test/api";

/// Answers every request with the same response and records what was sent.
#[derive(Clone)]
pub struct FixedTransport {
    response: Option<ApiResponse>,
    pub seen: Arc<Mutex<Vec<ApiRequest>>>,
}

impl FixedTransport {
    pub fn answering(status: u16, body: &str) -> Self {
        Self {
            response: Some(ApiResponse { status, body: body.to_owned() }),
            seen: Arc::default(),
        }
    }

    pub fn offline() -> Self {
        Self { response: None, seen: Arc::default() }
    }
}

impl Transport for FixedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.seen.lock().expect("seen").push(request);
        self.response
            .clone()
            .ok_or_else(|| ApiError::Network("offline".to_owned()))
    }
}

pub fn client(transport: FixedTransport) -> (ApiClient<FixedTransport>, Session) {
    let session = Session::new(MemoryTokenStore::default());
    (ApiClient::new(BASE, session.clone(), transport), session)
}
