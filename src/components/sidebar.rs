//! Sidebar navigation for authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::use_session;

const NAV_ITEMS: [(&str, &str); 8] = [
    ("/dashboard", "Dashboard"),
    ("/voice-analysis", "Voice Analysis"),
    ("/face-analysis", "Face Analysis"),
    ("/text-analysis", "Text Analysis"),
    ("/fusion-dashboard", "Fusion Results"),
    ("/reports", "Reports"),
    ("/about", "About"),
    ("/how-it-works", "How It Works"),
];

/// Navigation rail with active-route highlight, the signed-in user, and the
/// logout action.
#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <aside class=move || {
            if open.get() { "sidebar sidebar--open" } else { "sidebar" }
        }>
            <div class="sidebar__brand">
                <a href="/about" class="sidebar__logo">"TruthLens"</a>
                {move || {
                    session.current_identity().map(|identity| {
                        view! { <span class="sidebar__user">{identity.name}</span> }
                    })
                }}
            </div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(path, label)| {
                        view! {
                            <a
                                href=path
                                class=move || {
                                    if pathname.get() == path {
                                        "sidebar__link sidebar__link--active"
                                    } else {
                                        "sidebar__link"
                                    }
                                }
                                on:click=move |_| open.set(false)
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="sidebar__footer">
                <button class="btn btn--ghost sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
