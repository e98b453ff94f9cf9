use super::*;

#[test]
fn loading_state_shows_loading() {
    assert_eq!(analytics_lines(&Loadable::Loading), ["Loading..."]);
}

#[test]
fn snapshot_renders_both_counters() {
    let state = Loadable::Ready(AnalyticsSnapshot { total_users: 12, total_posts: 40 });
    assert_eq!(analytics_lines(&state), ["Total Users: 12", "Posts Shared: 40"]);
}

#[test]
fn failed_fetch_stays_loading() {
    let mut state = Loadable::<AnalyticsSnapshot>::Loading;
    state.resolve(Err(api::ApiError::Status { status: 500, body: String::new() }));
    assert_eq!(analytics_lines(&state), ["Loading..."]);
}
