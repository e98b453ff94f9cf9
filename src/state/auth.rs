#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use api::Session;

/// Whether a session token is present. Mirrors the token store so the nav
/// bar can react to login and logout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub signed_in: bool,
}

impl AuthState {
    pub fn from_session(session: &Session) -> Self {
        Self { signed_in: session.is_signed_in() }
    }
}
