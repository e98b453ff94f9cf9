use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_disconnected_and_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.draft.is_empty());
    assert_eq!(state.status, ConnectionStatus::Disconnected);
    assert_eq!(state.status_label(), "Disconnected");
}

// =============================================================
// Draft handling
// =============================================================

#[test]
fn take_draft_returns_text_and_clears_input() {
    let mut state = ChatState { draft: "hello".to_owned(), ..ChatState::default() };
    assert_eq!(state.take_draft().as_deref(), Some("hello"));
    assert!(state.draft.is_empty());
}

#[test]
fn take_draft_keeps_surrounding_whitespace() {
    let mut state = ChatState { draft: " hi ".to_owned(), ..ChatState::default() };
    assert_eq!(state.take_draft().as_deref(), Some(" hi "));
}

#[test]
fn blank_draft_is_not_sent_but_input_is_cleared() {
    let mut state = ChatState { draft: "   ".to_owned(), ..ChatState::default() };
    assert_eq!(state.take_draft(), None);
    assert!(state.draft.is_empty());
}

// =============================================================
// Events
// =============================================================

#[test]
fn messages_append_in_arrival_order() {
    let mut state = ChatState::default();
    for text in ["A", "B", "C"] {
        state.apply(ChatEvent::Message(text.to_owned()));
    }
    assert_eq!(state.messages, ["A", "B", "C"]);
}

#[test]
fn status_events_replace_status_and_keep_messages() {
    let mut state = ChatState::default();
    state.apply(ChatEvent::Status(ConnectionStatus::Connecting));
    assert_eq!(state.status_label(), "Connecting...");
    state.apply(ChatEvent::Status(ConnectionStatus::Connected));
    assert_eq!(state.status_label(), "Connected");
    state.apply(ChatEvent::Message("kept".to_owned()));
    state.apply(ChatEvent::Status(ConnectionStatus::Disconnected));

    assert_eq!(state.status_label(), "Disconnected");
    assert_eq!(state.messages, ["kept"]);
}

#[test]
fn messages_are_accepted_until_disconnected() {
    let mut state = ChatState::default();
    assert!(!state.accepts_messages());
    state.apply(ChatEvent::Status(ConnectionStatus::Connecting));
    assert!(state.accepts_messages());
    state.apply(ChatEvent::Status(ConnectionStatus::Connected));
    assert!(state.accepts_messages());
    state.apply(ChatEvent::Status(ConnectionStatus::Disconnected));
    assert!(!state.accepts_messages());
}
