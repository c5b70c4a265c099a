use super::*;
use crate::state::session::Identity;

fn identity() -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "alice".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
    }
}

#[test]
fn redirects_when_loaded_and_no_identity() {
    let state = SessionState { identity: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_while_restore_is_pending() {
    let state = SessionState { identity: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_when_identity_exists() {
    let state = SessionState { identity: Some(identity()), loading: false };
    assert!(!should_redirect_unauth(&state));
}
