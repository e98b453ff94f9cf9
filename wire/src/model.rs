//! REST request/response bodies.
//!
//! Field names follow the backend's JSON (`_id`, `mediaUrl`, `totalUsers`).
//! Unknown fields are ignored and optional fields default, so the client
//! renders whatever subset the server returned.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login response. Only the token is read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    #[serde(default)]
    pub token: String,
}

/// Post author as embedded in a feed entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
}

/// A feed entry. Read-only from the client's side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "mediaUrl", default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl Post {
    /// Media reference to render, treating an empty string as absent.
    #[must_use]
    pub fn media(&self) -> Option<&str> {
        self.media_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Public profile returned by `GET /users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub bio: String,
}

/// A notification line. There is no read/unread state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub text: String,
}

/// Point-in-time counters from `GET /analytics`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_posts: u64,
}
