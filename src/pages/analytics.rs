//! Analytics counters.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use api::Loadable;
use leptos::prelude::*;
use wire::AnalyticsSnapshot;

use crate::util::load::{load_into, use_client, view_token};

pub fn analytics_lines(state: &Loadable<AnalyticsSnapshot>) -> Vec<String> {
    match state.ready() {
        None => vec!["Loading...".to_owned()],
        Some(snapshot) => vec![
            format!("Total Users: {}", snapshot.total_users),
            format!("Posts Shared: {}", snapshot.total_posts),
        ],
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let client = use_client();
    let snapshot = RwSignal::new(Loadable::<AnalyticsSnapshot>::Loading);
    load_into(snapshot, view_token(), async move { client.fetch_analytics().await });

    view! {
        <div class="analytics-page">
            <h1>"Analytics"</h1>
            {move || {
                analytics_lines(&snapshot.read())
                    .into_iter()
                    .map(|line| view! { <p>{line}</p> })
                    .collect_view()
            }}
        </div>
    }
}
