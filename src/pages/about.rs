//! Static informational page about the product.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::app_shell::AppShell;
use crate::state::session::use_session;
use crate::util::guard::install_unauth_redirect;

#[component]
pub fn AboutPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    view! {
        <AppShell>
            <div class="static-page">
                <h1>"About TruthLens"</h1>
                <p>
                    "TruthLens explores multi-modal deception detection: instead of trusting a "
                    "single signal, it is designed to weigh vocal patterns, facial cues, and "
                    "linguistic markers together before reaching a verdict."
                </p>
                <h2>"Why multi-modal?"</h2>
                <p>
                    "Any single channel can mislead. Vocal stress shows up in truthful but "
                    "nervous speakers; a calm face can accompany a rehearsed lie. Combining "
                    "independent channels is what gives a fused verdict its value."
                </p>
                <h2>"Where the product stands"</h2>
                <p>
                    "This release ships the full analysis workspace with simulated results. "
                    "The detection models are under active development and will connect through "
                    "the same screens you see today."
                </p>
            </div>
        </AppShell>
    }
}
