//! Session state and the constructor-injected session service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds at most one authenticated identity, mirrored wholesale to durable
//! browser storage on every mutation. Authentication is simulated: inputs
//! are shape-checked, an identity is fabricated client-side, and a fixed
//! delay stands in for the network round-trip. This is acknowledged
//! placeholder logic, not a security boundary.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::net::endpoints::AUTH_DELAY_MS;
use crate::util::latency::artificial_delay;

/// localStorage key for the serialized session record.
pub const SESSION_KEY: &str = "truthlens_session";

const MIN_PASSWORD_LEN: usize = 6;

/// The client-side record of who is logged in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Session state tracking the current identity and restore status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// True until `restore` has run (and during simulated auth round-trips).
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { identity: None, loading: true }
    }
}

/// Durable storage seam. The browser implementation writes localStorage;
/// tests substitute an in-memory store.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

/// localStorage-backed store. Stateless; the browser owns the data.
#[derive(Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<String> {
        crate::util::storage::get(SESSION_KEY)
    }

    fn save(&self, raw: &str) {
        crate::util::storage::set(SESSION_KEY, raw);
    }

    fn clear(&self) {
        crate::util::storage::remove(SESSION_KEY);
    }
}

/// Text before the `@`; the fabricated display name for plain logins.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

pub fn login_input_valid(username: &str, email: &str, password: &str) -> bool {
    !username.is_empty() && !email.is_empty() && password.len() >= MIN_PASSWORD_LEN
}

pub fn signup_input_valid(name: &str, username: &str, email: &str, password: &str) -> bool {
    !name.is_empty() && login_input_valid(username, email, password)
}

fn fabricate_identity(name: &str, username: &str, email: &str) -> Identity {
    Identity {
        id: Uuid::new_v4().to_string(),
        name: name.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
    }
}

pub fn encode_identity(identity: &Identity) -> Option<String> {
    serde_json::to_string(identity).ok()
}

pub fn decode_identity(raw: &str) -> Option<Identity> {
    serde_json::from_str(raw).ok()
}

fn persist(store: &dyn SessionStore, identity: &Identity) {
    if let Some(raw) = encode_identity(identity) {
        store.save(&raw);
    }
}

/// Core login transition. Returns false and leaves any prior session
/// untouched when the inputs fail the shape check.
pub fn apply_login(
    state: &mut SessionState,
    store: &dyn SessionStore,
    username: &str,
    email: &str,
    password: &str,
) -> bool {
    state.loading = false;
    if !login_input_valid(username, email, password) {
        return false;
    }
    let identity = fabricate_identity(email_local_part(email), username, email);
    persist(store, &identity);
    state.identity = Some(identity);
    true
}

/// Core signup transition; like login but keeps the given display name.
pub fn apply_signup(
    state: &mut SessionState,
    store: &dyn SessionStore,
    name: &str,
    username: &str,
    email: &str,
    password: &str,
) -> bool {
    state.loading = false;
    if !signup_input_valid(name, username, email, password) {
        return false;
    }
    let identity = fabricate_identity(name, username, email);
    persist(store, &identity);
    state.identity = Some(identity);
    true
}

/// Clears memory and durable storage unconditionally.
pub fn apply_logout(state: &mut SessionState, store: &dyn SessionStore) {
    state.identity = None;
    store.clear();
}

/// Loads a previously stored identity. A record that fails to decode is
/// discarded and the user is treated as logged out.
pub fn apply_restore(state: &mut SessionState, store: &dyn SessionStore) {
    if let Some(raw) = store.load() {
        match decode_identity(&raw) {
            Some(identity) => state.identity = Some(identity),
            None => {
                log::warn!("discarding corrupt stored session record");
                store.clear();
            }
        }
    }
    state.loading = false;
}

/// Session service provided to the view layer via context.
///
/// All interface methods route through the `apply_*` transitions above so
/// the behavior stays testable without a reactive runtime.
#[derive(Clone, Copy)]
pub struct SessionService<S: SessionStore> {
    state: RwSignal<SessionState>,
    store: S,
}

impl<S: SessionStore + Copy + 'static> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self { state: RwSignal::new(SessionState::default()), store }
    }

    /// Reactive snapshot of the session state.
    pub fn current(&self) -> SessionState {
        self.state.get()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.state.get().identity
    }

    pub async fn login(&self, username: &str, email: &str, password: &str) -> bool {
        self.state.update(|s| s.loading = true);
        artificial_delay(AUTH_DELAY_MS).await;
        let store = self.store;
        self.state
            .try_update(|s| apply_login(s, &store, username, email, password))
            .unwrap_or(false)
    }

    pub async fn signup(&self, name: &str, username: &str, email: &str, password: &str) -> bool {
        self.state.update(|s| s.loading = true);
        artificial_delay(AUTH_DELAY_MS).await;
        let store = self.store;
        self.state
            .try_update(|s| apply_signup(s, &store, name, username, email, password))
            .unwrap_or(false)
    }

    pub fn logout(&self) {
        let store = self.store;
        self.state.update(|s| apply_logout(s, &store));
    }

    pub fn restore(&self) {
        let store = self.store;
        self.state.update(|s| apply_restore(s, &store));
    }
}

/// Concrete service type the app injects.
pub type Session = SessionService<LocalSessionStore>;

/// Fetch the injected session service.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
