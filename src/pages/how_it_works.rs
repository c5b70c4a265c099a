//! Static walkthrough of the detection pipeline.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::app_shell::AppShell;
use crate::state::session::use_session;
use crate::util::guard::install_unauth_redirect;

const STEPS: [(&str, &str); 4] = [
    (
        "1. Capture",
        "Record audio, capture video, or paste a written statement directly in the browser.",
    ),
    (
        "2. Extract",
        "Each modality extracts its own features: pitch and jitter for voice, \
         micro-expressions for face, linguistic markers for text.",
    ),
    (
        "3. Score",
        "Every channel produces an independent verdict with a confidence score.",
    ),
    (
        "4. Fuse",
        "A weighted combination of the per-channel scores yields the final verdict \
         on the fusion dashboard.",
    ),
];

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    view! {
        <AppShell>
            <div class="static-page">
                <h1>"How It Works"</h1>
                <p>"From raw capture to a fused verdict in four steps."</p>
                <div class="static-page__steps">
                    {STEPS
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="step-card">
                                    <h2>{title}</h2>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </AppShell>
    }
}
