//! Session token persistence in `window.localStorage`.

use api::{SessionError, TOKEN_KEY, TokenStore};

/// Token store backed by `localStorage[TOKEN_KEY]`.
///
/// Holds no handle: `Storage` is not `Send`, so it is looked up per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_owned()))
}

#[cfg(feature = "csr")]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        local_storage().ok()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        local_storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), SessionError> {
        local_storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
}

#[cfg(not(feature = "csr"))]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) -> Result<(), SessionError> {
        Err(SessionError::Storage(format!("localStorage unavailable for key {TOKEN_KEY}")))
    }

    fn clear(&self) -> Result<(), SessionError> {
        Ok(())
    }
}
