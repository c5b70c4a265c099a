//! Tab strip linking the four analysis pages.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

const TABS: [(&str, &str); 4] = [
    ("/voice-analysis", "Voice"),
    ("/face-analysis", "Face"),
    ("/text-analysis", "Text"),
    ("/fusion-dashboard", "Fusion"),
];

#[component]
pub fn AnalysisNavigation() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="analysis-nav">
            {TABS
                .into_iter()
                .map(|(path, label)| {
                    view! {
                        <a
                            href=path
                            class=move || {
                                if pathname.get() == path {
                                    "analysis-nav__tab analysis-nav__tab--active"
                                } else {
                                    "analysis-nav__tab"
                                }
                            }
                        >
                            {label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
