//! Session token ownership.
//!
//! The token is an opaque string issued at login. It is persisted by a
//! platform [`TokenStore`] (browser `localStorage`, a CLI token file, or
//! memory in tests) and only ever reached through a [`Session`], which hands
//! out the `Authorization` header value for outgoing requests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::error::SessionError;

/// Storage key for the persisted token.
pub const TOKEN_KEY: &str = "token";

/// Persistent home of the session token.
pub trait TokenStore: Send + Sync {
    /// Current token, if one is stored.
    fn load(&self) -> Option<String>;

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backing store rejects the write.
    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the stored token. Removing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backing store rejects the removal.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Explicit session handle passed to everything that issues requests.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Stored token, treating an empty string as no token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    /// Value for the `Authorization` header, if signed in.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }

    /// Persist a freshly issued token.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`SessionError`].
    pub fn store_token(&self, token: &str) -> Result<(), SessionError> {
        self.store.save(token)
    }

    /// Drop the token. This is the only way a session ends.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`SessionError`].
    pub fn sign_out(&self) -> Result<(), SessionError> {
        self.store.clear()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}

/// In-process token store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| SessionError::Storage("token slot poisoned".to_owned()))?;
        *slot = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| SessionError::Storage("token slot poisoned".to_owned()))?;
        *slot = None;
        Ok(())
    }
}
