//! One feed entry.

use leptos::prelude::*;
use wire::Post;

use crate::routes::Route;

/// Author, content and the media image when the post has one. The author
/// name links to their profile when the backend included the author id.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let media = post.media().map(str::to_owned);
    let Post { author, content, .. } = post;
    let author = if author.id.is_empty() {
        view! { <span>{author.username}</span> }.into_any()
    } else {
        view! { <a href={Route::Profile(author.id).path()}>{author.username}</a> }.into_any()
    };

    view! {
        <article class="post-card">
            <h3 class="post-card__author">{author}</h3>
            <p class="post-card__content">{content}</p>
            {media.map(|url| view! { <img class="post-card__media" src=url alt="Post media"/> })}
        </article>
    }
}
