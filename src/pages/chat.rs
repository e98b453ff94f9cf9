//! Realtime chat view.
//!
//! Entering the view acquires one chat channel; leaving it (route change or
//! unmount) releases the channel. Received messages are appended in arrival
//! order and the draft is cleared on every send attempt.

use std::sync::Arc;

use api::{ChatHandle, Messenger, ScopeToken};
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::socket::BrowserConnector;
use crate::state::chat::ChatState;
use crate::util::load::{Client, spawn, use_client, view_token};

fn open_channel(
    config: &AppConfig,
    client: &Client,
    chat: RwSignal<ChatState>,
    token: ScopeToken,
) -> Option<ChatHandle> {
    let Some(url) = config.socket_url() else {
        leptos::logging::warn!("no realtime endpoint for origin {}", config.realtime_origin);
        return None;
    };
    let (handle, pump) = Messenger::new(BrowserConnector, url, client.session().clone()).enter();
    spawn(async move {
        let outcome = pump
            .run(move |event| {
                if token.is_live() {
                    chat.try_update(|state| state.apply(event));
                }
            })
            .await;
        if let Err(e) = outcome {
            leptos::logging::debug_warn!("chat pump stopped: {e}");
        }
    });
    Some(handle)
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let client = use_client();
    let chat = RwSignal::new(ChatState::default());

    let handle = Arc::new(open_channel(&config, &client, chat, view_token()));
    let owned = handle.clone();
    on_cleanup(move || {
        if let Some(handle) = &*owned {
            handle.leave();
        }
    });

    let send = move || {
        let Some(text) = chat.try_update(ChatState::take_draft).flatten() else {
            return;
        };
        let delivered = chat.with_untracked(ChatState::accepts_messages)
            && handle.iter().any(|handle| handle.send(&text));
        if !delivered {
            leptos::logging::warn!("chat is not connected; message dropped");
        }
    };
    let send_on_click = send.clone();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="chat-page">
            <h1>"Chat"</h1>
            <p class="chat-page__status">{move || chat.read().status_label()}</p>
            <ul class="chat-page__messages">
                {move || {
                    chat.read()
                        .messages
                        .iter()
                        .map(|text| view! { <li>{text.clone()}</li> })
                        .collect_view()
                }}
            </ul>
            <div class="chat-page__input">
                <input
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || chat.read().draft.clone()
                    on:input=move |ev| chat.update(|state| state.draft = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button on:click=move |_| send_on_click()>"Send"</button>
            </div>
        </div>
    }
}
