//! Login form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use api::auth::LOGIN_FAILED;
use api::{ApiClient, Transport};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wire::Credentials;

use crate::routes::Route;
use crate::state::auth::AuthState;
use crate::util::load::{spawn, use_client, view_token};

/// Submit credentials. On success the token is persisted and the caller
/// should navigate to the returned route; on any failure the caller shows
/// the returned notice.
///
/// # Errors
///
/// Returns [`LOGIN_FAILED`] for every failure cause.
pub async fn submit_login<T: Transport>(
    client: &ApiClient<T>,
    credentials: &Credentials,
) -> Result<Route, &'static str> {
    match client.login(credentials).await {
        Ok(()) => Ok(Route::Feed),
        Err(e) => {
            leptos::logging::warn!("login failed: {e}");
            Err(LOGIN_FAILED)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = use_client();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let token = view_token();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let client = client.clone();
        let navigate = navigate.clone();
        let token = token.clone();
        spawn(async move {
            let outcome = submit_login(&client, &credentials).await;
            auth.set(AuthState::from_session(client.session()));
            if !token.is_live() {
                return;
            }
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
            <h1>"Login"</h1>
            <form class="auth-page__form" on:submit=on_submit>
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
                <button type="submit">"Login"</button>
            </form>
            {move || notice.get().map(|message| view! { <p class="auth-page__notice">{message}</p> })}
        </div>
    }
}
