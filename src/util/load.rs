//! View-owned fetches.
//!
//! A page asks for a [`ScopeToken`] tied to its own lifetime and hands it to
//! [`load_into`] with the fetch future. The result is written into the page's
//! signal only while the page is still mounted; a late response is dropped.

use std::future::Future;

use api::{ApiClient, ApiError, Loadable, RequestSlot, ScopeToken, ViewScope};
use leptos::prelude::*;

use crate::net::fetch::FetchTransport;

/// The API client provided through context.
pub type Client = ApiClient<FetchTransport>;

pub fn use_client() -> Client {
    expect_context::<Client>()
}

/// Scope token that goes dead when the current reactive owner is cleaned up.
pub fn view_token() -> ScopeToken {
    let scope = ViewScope::new();
    let token = scope.token();
    on_cleanup(move || scope.close());
    token
}

/// Request slot for views that refetch when a route parameter changes.
/// Cleanup of the current owner closes whatever request is in flight.
pub fn view_requests() -> std::sync::Arc<RequestSlot> {
    let slot = std::sync::Arc::new(RequestSlot::new());
    let owned = slot.clone();
    on_cleanup(move || owned.close());
    slot
}

/// Run `work` on the browser event loop. Outside the browser there is no
/// event loop and the work is dropped unpolled.
pub fn spawn(work: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(work);

    #[cfg(not(feature = "csr"))]
    drop(work);
}

/// Spawn `fetch` and resolve `target` with its result if `token` is still live.
pub fn load_into<T, F>(target: RwSignal<Loadable<T>>, token: ScopeToken, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn(async move {
        if let Some(result) = token.run(fetch).await {
            target.try_update(|state| state.resolve(result));
        }
    });
}
