//! Plain-text rendering, one entry per line.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wire::{AnalyticsSnapshot, Notification, Post, Profile};

pub fn posts(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .map(|post| match post.media() {
            Some(url) => format!("{}: {} [{url}]", post.author.username, post.content),
            None => format!("{}: {}", post.author.username, post.content),
        })
        .collect()
}

pub fn profile(profile: &Profile) -> Vec<String> {
    vec![profile.username.clone(), profile.bio.clone()]
}

pub fn analytics(snapshot: &AnalyticsSnapshot) -> Vec<String> {
    vec![
        format!("Total Users: {}", snapshot.total_users),
        format!("Posts Shared: {}", snapshot.total_posts),
    ]
}

pub fn notifications(notifications: &[Notification]) -> Vec<String> {
    notifications.iter().map(|n| n.text.clone()).collect()
}
