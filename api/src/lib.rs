//! # api
//!
//! Transport-agnostic client for the Pulse backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app and the CLI share this crate. Each front end supplies the
//! platform pieces (a [`Transport`] for HTTP, a [`TokenStore`] for the
//! session token, a [`Connector`] for WebSocket links) and gets the same
//! request building, auth flow, view scoping and realtime pump.
//!
//! DESIGN
//! ======
//! - The session token is never read from ambient globals: it lives in a
//!   [`Session`] and is attached by [`RequestBuilder`].
//! - Every view-bound fetch is checked against a [`ScopeToken`] before its
//!   result is applied.
//! - A realtime connection lives exactly as long as its [`ChatHandle`].

pub mod auth;
pub mod client;
pub mod error;
pub mod realtime;
pub mod request;
pub mod scope;
pub mod session;

#[cfg(test)]
mod test_support;

pub use client::ApiClient;
pub use error::{ApiError, RealtimeError, SessionError};
pub use realtime::{ChatEvent, ChatHandle, ChatPump, Connector, ConnectionStatus, Link, Messenger};
pub use request::{ApiRequest, ApiResponse, Method, RequestBuilder, Transport};
pub use scope::{Loadable, RequestSlot, ScopeToken, ViewScope};
pub use session::{MemoryTokenStore, Session, TOKEN_KEY, TokenStore};
