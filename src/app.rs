//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use api::{ApiClient, Session};

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::net::fetch::FetchTransport;
use crate::net::storage::LocalStorageTokenStore;
use crate::pages::{
    analytics::AnalyticsPage, chat::ChatPage, feed::FeedPage, login::LoginPage,
    notifications::NotificationsPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::util::load::Client;

/// Root application component.
///
/// Provides the build configuration, the API client (which owns the session)
/// and the auth state, then maps URL paths to pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let session = Session::new(LocalStorageTokenStore);
    let auth = RwSignal::new(AuthState::from_session(&session));
    let client: Client = ApiClient::new(config.api_base.clone(), session, FetchTransport);

    provide_context(config);
    provide_context(client);
    provide_context(auth);

    view! {
        <Title text="Pulse"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=FeedPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("profile"), ParamSegment("id")) view=ProfilePage/>
                    <Route path=StaticSegment("chat") view=ChatPage/>
                    <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    <Route path=StaticSegment("notifications") view=NotificationsPage/>
                </Routes>
            </main>
        </Router>
    }
}
