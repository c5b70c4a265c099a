//! Static frequently-asked-questions page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::app_shell::AppShell;
use crate::state::session::use_session;
use crate::util::guard::install_unauth_redirect;

const ENTRIES: [(&str, &str); 4] = [
    (
        "Is my data uploaded anywhere?",
        "No. Recordings, captures, and text stay in your browser; nothing is sent to a \
         server in this release.",
    ),
    (
        "How accurate is the detection?",
        "The models are still being integrated, so every result shown today is simulated. \
         Published accuracy figures will accompany the model release.",
    ),
    (
        "Which browsers are supported?",
        "Any modern browser with microphone and camera access. Device permissions are \
         requested only when you start a recording or the camera.",
    ),
    (
        "Can I export my history?",
        "Yes — the reports page exports the current (filtered) list as a CSV download.",
    ),
];

#[component]
pub fn FaqPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    view! {
        <AppShell>
            <div class="static-page">
                <h1>"FAQ"</h1>
                {ENTRIES
                    .into_iter()
                    .map(|(question, answer)| {
                        view! {
                            <details class="faq-entry">
                                <summary>{question}</summary>
                                <p>{answer}</p>
                            </details>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </AppShell>
    }
}
