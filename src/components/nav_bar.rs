//! Top navigation linking every view, with session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::Route;
use crate::state::auth::AuthState;
use crate::util::load::use_client;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client();
    let navigate = use_navigate();

    let log_out = move |_| {
        if let Err(e) = client.logout() {
            leptos::logging::warn!("logout failed: {e}");
        }
        auth.set(AuthState::from_session(client.session()));
        navigate(&Route::Login.path(), NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <A href={Route::Feed.path()}>"Feed"</A>
            <A href={Route::Chat.path()}>"Chat"</A>
            <A href={Route::Analytics.path()}>"Analytics"</A>
            <A href={Route::Notifications.path()}>"Notifications"</A>
            <span class="nav-bar__session">
                <Show
                    when=move || auth.get().signed_in
                    fallback=|| {
                        view! {
                            <A href={Route::Login.path()}>"Login"</A>
                            <A href={Route::Register.path()}>"Register"</A>
                        }
                    }
                >
                    <button class="nav-bar__logout" on:click=log_out.clone()>
                        "Log out"
                    </button>
                </Show>
            </span>
        </nav>
    }
}
