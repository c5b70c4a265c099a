//! Route guard for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies identical unauthenticated redirect behavior:
//! a binary check on the session state once restore has finished.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionState};

/// True when session restore has finished and no identity is present.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.identity.is_none()
}

/// Redirect to `/login` whenever the session has loaded with no identity.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.current()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
