use std::cell::RefCell;

use super::*;

/// In-memory stand-in for localStorage.
#[derive(Default)]
struct MemoryStore {
    record: RefCell<Option<String>>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.record.borrow().clone()
    }

    fn save(&self, raw: &str) {
        *self.record.borrow_mut() = Some(raw.to_owned());
    }

    fn clear(&self) {
        *self.record.borrow_mut() = None;
    }
}

fn logged_in_state(store: &MemoryStore) -> SessionState {
    let mut state = SessionState::default();
    assert!(apply_login(&mut state, store, "alice", "alice@example.com", "secret1"));
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_state_default_is_unauthenticated_and_loading() {
    let state = SessionState::default();
    assert!(state.identity.is_none());
    assert!(state.loading);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_with_short_password_fails_and_keeps_prior_session() {
    let store = MemoryStore::default();
    let mut state = logged_in_state(&store);
    let prior = state.identity.clone();
    let prior_record = store.record.borrow().clone();

    assert!(!apply_login(&mut state, &store, "bob", "bob@example.com", "short"));
    assert_eq!(state.identity, prior);
    assert_eq!(*store.record.borrow(), prior_record);
}

#[test]
fn login_requires_username_and_email() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    assert!(!apply_login(&mut state, &store, "", "a@b.com", "secret1"));
    assert!(!apply_login(&mut state, &store, "alice", "", "secret1"));
    assert!(state.identity.is_none());
    assert!(store.record.borrow().is_none());
}

#[test]
fn login_fabricates_identity_from_email_local_part() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();

    assert!(apply_login(&mut state, &store, "alice", "alice@example.com", "secret1"));
    let identity = state.identity.clone();
    let identity = match identity {
        Some(i) => i,
        None => panic!("login succeeded without an identity"),
    };
    assert_eq!(identity.name, "alice");
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.email, "alice@example.com");
    assert!(!state.loading);
}

#[test]
fn login_persists_the_record_to_the_store() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    assert!(apply_login(&mut state, &store, "alice", "alice@example.com", "secret1"));

    let raw = store.record.borrow().clone();
    let stored = raw.as_deref().and_then(decode_identity);
    assert_eq!(stored, state.identity);
}

#[test]
fn email_local_part_handles_missing_at_sign() {
    assert_eq!(email_local_part("alice@example.com"), "alice");
    assert_eq!(email_local_part("no-at-sign"), "no-at-sign");
    assert_eq!(email_local_part("a@b@c"), "a");
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_with_empty_name_fails_and_keeps_prior_session() {
    let store = MemoryStore::default();
    let mut state = logged_in_state(&store);
    let prior = state.identity.clone();

    assert!(!apply_signup(&mut state, &store, "", "bob", "bob@example.com", "secret1"));
    assert_eq!(state.identity, prior);
}

#[test]
fn signup_keeps_the_given_display_name() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();

    assert!(apply_signup(&mut state, &store, "Bob Smith", "bob", "bob@example.com", "secret1"));
    let name = state.identity.as_ref().map(|i| i.name.clone());
    assert_eq!(name.as_deref(), Some("Bob Smith"));
}

#[test]
fn signup_with_short_password_fails() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    assert!(!apply_signup(&mut state, &store, "Bob", "bob", "bob@example.com", "12345"));
    assert!(state.identity.is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_memory_and_store() {
    let store = MemoryStore::default();
    let mut state = logged_in_state(&store);

    apply_logout(&mut state, &store);
    assert!(state.identity.is_none());
    assert!(store.record.borrow().is_none());
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_loads_a_previously_stored_identity() {
    let store = MemoryStore::default();
    let mut first = SessionState::default();
    assert!(apply_login(&mut first, &store, "alice", "alice@example.com", "secret1"));

    let mut second = SessionState::default();
    apply_restore(&mut second, &store);
    assert_eq!(second.identity, first.identity);
    assert!(!second.loading);
}

#[test]
fn restore_discards_a_corrupt_record() {
    let store = MemoryStore::default();
    *store.record.borrow_mut() = Some("{not json".to_owned());

    let mut state = SessionState::default();
    apply_restore(&mut state, &store);
    assert!(state.identity.is_none());
    assert!(!state.loading);
    assert!(store.record.borrow().is_none(), "corrupt entry should be removed");
}

#[test]
fn restore_with_empty_store_finishes_unauthenticated() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    apply_restore(&mut state, &store);
    assert!(state.identity.is_none());
    assert!(!state.loading);
}

// =============================================================
// Record round-trip
// =============================================================

#[test]
fn identity_record_round_trips_through_json() {
    let identity = Identity {
        id: "u1".to_owned(),
        name: "alice".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
    };
    let raw = match encode_identity(&identity) {
        Some(raw) => raw,
        None => panic!("identity should encode"),
    };
    assert_eq!(decode_identity(&raw), Some(identity));
}
