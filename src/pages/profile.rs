//! Profile view for `/profile/:id`.

use api::Loadable;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wire::Profile;

use crate::util::load::{load_into, use_client, view_requests};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = use_client();
    let params = use_params_map();
    let profile = RwSignal::new(Loadable::<Profile>::Loading);
    let requests = view_requests();

    // Refetch whenever the route id changes; the previous request is superseded.
    Effect::new(move || {
        let Some(user_id) = params.read().get("id") else {
            return;
        };
        profile.set(Loadable::Loading);
        let client = client.clone();
        load_into(profile, requests.begin(), async move { client.fetch_profile(&user_id).await });
    });

    view! {
        <div class="profile-page">
            {move || match profile.get() {
                Loadable::Loading => view! { <p>"Loading..."</p> }.into_any(),
                Loadable::Ready(user) => {
                    view! {
                        <h1 class="profile-page__username">{user.username}</h1>
                        <p class="profile-page__bio">{user.bio}</p>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
