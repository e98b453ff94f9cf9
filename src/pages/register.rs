//! Registration form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use api::auth::REGISTRATION_FAILED;
use api::{ApiClient, Transport};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wire::Registration;

use crate::routes::Route;
use crate::util::load::{spawn, use_client, view_token};

/// Submit a registration. Success leads to the login view.
///
/// # Errors
///
/// Returns [`REGISTRATION_FAILED`] for every failure cause.
pub async fn submit_registration<T: Transport>(
    client: &ApiClient<T>,
    registration: &Registration,
) -> Result<Route, &'static str> {
    match client.register(registration).await {
        Ok(()) => Ok(Route::Login),
        Err(e) => {
            leptos::logging::warn!("registration failed: {e}");
            Err(REGISTRATION_FAILED)
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = use_client();
    let navigate = use_navigate();
    let token = view_token();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let registration = Registration {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let client = client.clone();
        let navigate = navigate.clone();
        let token = token.clone();
        spawn(async move {
            let Some(outcome) = token.run(submit_registration(&client, &registration)).await else {
                return;
            };
            match outcome {
                Ok(route) => navigate(&route.path(), NavigateOptions::default()),
                Err(message) => {
                    notice.try_set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Register"</h1>
            <form class="auth-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit">"Register"</button>
            </form>
            {move || notice.get().map(|message| view! { <p class="auth-page__notice">{message}</p> })}
        </div>
    }
}
