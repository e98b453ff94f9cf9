//! Top-level views, one per route.

pub mod analytics;
pub mod chat;
pub mod feed;
pub mod login;
pub mod notifications;
pub mod profile;
pub mod register;

#[cfg(test)]
mod test_support;
