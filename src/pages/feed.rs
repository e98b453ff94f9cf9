//! Home view: the post feed.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use api::Loadable;
use leptos::prelude::*;
use wire::Post;

use crate::components::post_card::PostCard;
use crate::util::load::{load_into, use_client, view_token};

/// Posts to render, in response order. Nothing is shown while loading.
pub fn visible_posts(state: &Loadable<Vec<Post>>) -> Vec<Post> {
    state.ready().cloned().unwrap_or_default()
}

/// Posts paired with their render key. Keyed by position because `_id` may be
/// missing or repeated in a response.
pub fn feed_entries(state: &Loadable<Vec<Post>>) -> Vec<(usize, Post)> {
    visible_posts(state).into_iter().enumerate().collect()
}

#[component]
pub fn FeedPage() -> impl IntoView {
    let client = use_client();
    let posts = RwSignal::new(Loadable::<Vec<Post>>::Loading);
    load_into(posts, view_token(), async move { client.fetch_posts().await });

    view! {
        <div class="feed-page">
            <h1>"Feed"</h1>
            <For
                each=move || feed_entries(&posts.read())
                key=|(position, _)| *position
                children=|(_, post)| view! { <PostCard post/> }
            />
        </div>
    }
}
