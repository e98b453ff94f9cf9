//! Request building and the HTTP transport seam.
//!
//! A [`RequestBuilder`] produces a plain [`ApiRequest`] value; a platform
//! [`Transport`] turns it into a network call. Keeping the request a value
//! makes header attachment testable without a network.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCEPT: &str = "Accept";
const JSON: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully built HTTP request, independent of any HTTP library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a successful JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses and
    /// [`ApiError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status { status: self.status, body: self.body });
        }
        serde_json::from_str(&self.body).map_err(ApiError::Decode)
    }
}

/// Executes built requests. Implemented with `gloo-net` in the browser and
/// `reqwest` in the CLI.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send the request and return whatever status the server answered with.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Join a base URL and an endpoint path with exactly one `/` between them.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Builder for [`ApiRequest`].
#[derive(Debug)]
pub struct RequestBuilder {
    request: ApiRequest,
}

impl RequestBuilder {
    #[must_use]
    pub fn new(method: Method, base: &str, path: &str) -> Self {
        Self {
            request: ApiRequest {
                method,
                url: join_url(base, path),
                headers: vec![(ACCEPT.to_owned(), JSON.to_owned())],
                body: None,
            },
        }
    }

    /// Attach an `Authorization` header when a value is present.
    #[must_use]
    pub fn bearer(mut self, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.request.headers.push((AUTHORIZATION.to_owned(), value));
        }
        self
    }

    /// Serialize `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let text = serde_json::to_string(body).map_err(ApiError::Encode)?;
        self.request.headers.push((CONTENT_TYPE.to_owned(), JSON.to_owned()));
        self.request.body = Some(text);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> ApiRequest {
        self.request
    }
}
