//! Authenticator: login, registration and logout.
//!
//! Login exchanges a credential pair for an opaque token and persists it in
//! the client's [`Session`](crate::Session). Failures are not classified for
//! the user; front ends show [`LOGIN_FAILED`] or [`REGISTRATION_FAILED`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use wire::{Credentials, Registration, TokenGrant};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::{Method, Transport};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";

/// Notice shown for any login failure.
pub const LOGIN_FAILED: &str = "Login failed";
/// Notice shown for any registration failure.
pub const REGISTRATION_FAILED: &str = "Registration failed";

impl<T: Transport> ApiClient<T> {
    /// `POST /auth/login` and persist the returned token.
    ///
    /// The token is stored only when the response is a 2xx carrying a
    /// non-empty token; otherwise the session is left as it was.
    ///
    /// # Errors
    ///
    /// Transport/status/decode failures, [`ApiError::MissingToken`] for an
    /// empty token and [`ApiError::Session`] if the token cannot be stored.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = self.request(Method::Post, LOGIN_ENDPOINT).json(credentials)?.build();
        let grant: TokenGrant = self.send(request).await?.json()?;
        if grant.token.is_empty() {
            return Err(ApiError::MissingToken);
        }
        self.session().store_token(&grant.token)?;
        log::info!("signed in");
        Ok(())
    }

    /// `POST /auth/register`. The response body is ignored and no token is stored.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx statuses.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let request = self
            .request(Method::Post, REGISTER_ENDPOINT)
            .json(registration)?
            .build();
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status { status: response.status, body: response.body });
        }
        log::info!("registered new account");
        Ok(())
    }

    /// Remove the stored token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Session`] when the store rejects the removal.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.session().sign_out()?;
        log::info!("signed out");
        Ok(())
    }
}
