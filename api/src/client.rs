//! REST client and the resource fetchers.
//!
//! Each fetcher issues one parameterized `GET` and returns the decoded body
//! verbatim. There is no caching, pagination or retry; callers decide what
//! to do with a failure (views stay in their loading state).

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::de::DeserializeOwned;
use wire::{AnalyticsSnapshot, Notification, Post, Profile};

use crate::error::ApiError;
use crate::request::{ApiRequest, ApiResponse, Method, RequestBuilder, Transport};
use crate::session::Session;

pub const POSTS_ENDPOINT: &str = "/posts";
pub const ANALYTICS_ENDPOINT: &str = "/analytics";
pub const NOTIFICATIONS_ENDPOINT: &str = "/notifications";

pub(crate) fn profile_endpoint(user_id: &str) -> String {
    format!("/users/{user_id}")
}

/// HTTP client bound to one API origin and one session.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base: String,
    session: Session,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base: impl Into<String>, session: Session, transport: T) -> Self {
        Self { base: base.into(), session, transport }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Start a request against this client's origin with the session's
    /// bearer token already attached.
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        RequestBuilder::new(method, &self.base, path).bearer(self.session.bearer())
    }

    pub(crate) async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            log::debug!("request failed with status {}", response.status);
        }
        Ok(response)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let request = self.request(Method::Get, path).build();
        self.send(request).await?.json()
    }

    /// `GET /posts`, in server order.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json(POSTS_ENDPOINT).await
    }

    /// `GET /users/{user_id}`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        self.get_json(&profile_endpoint(user_id)).await
    }

    /// `GET /analytics`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure.
    pub async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot, ApiError> {
        self.get_json(ANALYTICS_ENDPOINT).await
    }

    /// `GET /notifications`, in server order.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure.
    pub async fn fetch_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json(NOTIFICATIONS_ENDPOINT).await
    }
}
