//! Login page driving the simulated session service.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;

const INVALID_CREDENTIALS: &str =
    "Invalid credentials. Username and email are required and passwords need 6+ characters.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let ok = session
                    .login(
                        &username.get_untracked(),
                        &email.get_untracked(),
                        &password.get_untracked(),
                    )
                    .await;
                if ok {
                    navigate("/dashboard", NavigateOptions::default());
                } else {
                    error.set(INVALID_CREDENTIALS.to_owned());
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <p class="auth-card__subtitle">"Access your TruthLens workspace"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href="/signup">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
