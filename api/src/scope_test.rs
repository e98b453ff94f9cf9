use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

#[test]
fn open_scope_token_is_live() {
    let scope = ViewScope::new();
    assert!(scope.token().is_live());
}

#[test]
fn closing_scope_invalidates_existing_tokens() {
    let scope = ViewScope::new();
    let token = scope.token();
    scope.close();
    assert!(!token.is_live());
    assert!(!scope.is_open());
}

#[test]
fn dropping_scope_invalidates_tokens() {
    let token = {
        let scope = ViewScope::new();
        scope.token()
    };
    assert!(!token.is_live());
}

#[test]
fn run_yields_output_while_scope_open() {
    let scope = ViewScope::new();
    let token = scope.token();
    assert_eq!(block_on(token.run(async { 7 })), Some(7));
}

#[test]
fn run_discards_output_resolved_after_exit() {
    let scope = ViewScope::new();
    let token = scope.token();
    let (tx, rx) = oneshot::channel::<u32>();

    let mut state = Loadable::<u32>::Loading;
    let pending = token.run(rx);

    // The view exits while the response is still in flight.
    drop(scope);
    tx.send(5).expect("send");

    if let Some(Ok(value)) = block_on(pending) {
        state.resolve(Ok(value));
    }
    assert!(state.is_loading());
}

#[test]
fn loadable_success_replaces_state_verbatim() {
    let mut state = Loadable::Loading;
    state.resolve(Ok(vec!["a", "b"]));
    assert_eq!(state.ready(), Some(&vec!["a", "b"]));

    state.resolve(Ok(vec!["c"]));
    assert_eq!(state, Loadable::Ready(vec!["c"]));
}

#[test]
fn loadable_failure_keeps_loading() {
    let mut state = Loadable::<u32>::default();
    state.resolve(Err(ApiError::Network("offline".to_owned())));
    assert!(state.is_loading());
    assert_eq!(state.ready(), None);
}

#[test]
fn loadable_failure_keeps_previous_value() {
    let mut state = Loadable::Ready(3);
    state.resolve(Err(ApiError::Status { status: 502, body: String::new() }));
    assert_eq!(state, Loadable::Ready(3));
}

#[test]
fn request_slot_supersedes_previous_request() {
    let slot = RequestSlot::new();
    let first = slot.begin();
    let second = slot.begin();

    assert!(!first.is_live());
    assert!(second.is_live());
}

#[test]
fn superseded_response_is_discarded() {
    let slot = RequestSlot::new();
    let (slow_tx, slow_rx) = oneshot::channel::<&str>();
    let slow_token = slot.begin();
    let slow = slow_token.run(slow_rx);
    let fast_token = slot.begin();
    let fast = fast_token.run(async { "bob" });

    let mut state = Loadable::Loading;
    if let Some(name) = block_on(fast) {
        state.resolve(Ok(name));
    }
    slow_tx.send("alice").expect("send");
    if let Some(Ok(name)) = block_on(slow) {
        state.resolve(Ok(name));
    }
    assert_eq!(state, Loadable::Ready("bob"));
}

#[test]
fn closing_request_slot_invalidates_current_request() {
    let slot = RequestSlot::new();
    let token = slot.begin();
    slot.close();
    slot.close();
    assert!(!token.is_live());
}
