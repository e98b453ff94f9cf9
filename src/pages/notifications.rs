//! Notification list.

use api::Loadable;
use leptos::prelude::*;
use wire::Notification;

use crate::util::load::{load_into, use_client, view_token};

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let client = use_client();
    let notifications = RwSignal::new(Loadable::<Vec<Notification>>::Loading);
    load_into(notifications, view_token(), async move { client.fetch_notifications().await });

    view! {
        <div class="notifications-page">
            <h1>"Notifications"</h1>
            <ul>
                {move || {
                    notifications
                        .read()
                        .ready()
                        .into_iter()
                        .flatten()
                        .map(|notification| view! { <li>{notification.text.clone()}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
