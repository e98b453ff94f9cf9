use api::MemoryTokenStore;

use super::*;

#[test]
fn auth_state_default_signed_out() {
    assert!(!AuthState::default().signed_in);
}

#[test]
fn auth_state_follows_stored_token() {
    let session = Session::new(MemoryTokenStore::with_token("tok"));
    assert!(AuthState::from_session(&session).signed_in);

    session.sign_out().expect("sign out");
    assert!(!AuthState::from_session(&session).signed_in);
}

#[test]
fn empty_stored_token_is_signed_out() {
    let session = Session::new(MemoryTokenStore::with_token(""));
    assert_eq!(AuthState::from_session(&session), AuthState { signed_in: false });
}
