//! Text analysis page.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::analysis::{ProviderHandle, TextReport};
use crate::components::analysis_nav::AnalysisNavigation;
use crate::components::app_shell::AppShell;
use crate::components::confidence_bar::ConfidenceBar;
use crate::state::session::use_session;
use crate::util::guard::install_unauth_redirect;

/// Below this many characters the analyze action stays disabled.
const MIN_ANALYZE_CHARS: usize = 10;

/// Soft guidance shown under the input.
const RECOMMENDED_CHARS: usize = 50;

pub(crate) fn can_analyze(input: &str) -> bool {
    !input.trim().is_empty() && input.len() >= MIN_ANALYZE_CHARS
}

pub(crate) fn char_count_hint(len: usize) -> String {
    format!("{len} characters \u{2022} Minimum {RECOMMENDED_CHARS} characters recommended")
}

#[component]
pub fn TextAnalysisPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());
    let provider = expect_context::<ProviderHandle>();

    let input = RwSignal::new(String::new());
    let analyzing = RwSignal::new(false);
    let result = RwSignal::new(None::<TextReport>);

    let on_analyze = move |_| {
        if analyzing.get() || !can_analyze(&input.get()) {
            return;
        }
        analyzing.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::util::latency::artificial_delay(crate::net::endpoints::ANALYSIS_DELAY_MS).await;
            match provider.0.text(&input.get_untracked()) {
                Ok(report) => result.set(Some(report)),
                Err(e) => crate::util::notice::blocking_notice(&e.to_string()),
            }
            analyzing.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = provider;
            analyzing.set(false);
        }
    };

    let on_clear = move |_| {
        input.set(String::new());
        result.set(None);
    };

    view! {
        <AppShell>
            <div class="analysis-page">
                <AnalysisNavigation/>
                <header>
                    <h1>"Text-Based Lie Detection"</h1>
                    <p class="page-subtitle">
                        "Analyze written text for deception patterns using linguistic analysis"
                    </p>
                </header>

                <div class="analysis-page__columns">
                    <section class="panel">
                        <h2 class="panel__title">"Text Input"</h2>
                        <textarea
                            class="analysis-textarea"
                            placeholder="Enter or paste the text you want to analyze..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            disabled=move || analyzing.get()
                        ></textarea>
                        <p class="panel__hint">{move || char_count_hint(input.get().len())}</p>
                        <div class="panel__actions">
                            <button
                                class="btn btn--primary"
                                on:click=on_analyze
                                disabled=move || analyzing.get() || !can_analyze(&input.get())
                            >
                                {move || {
                                    if analyzing.get() { "Analyzing Text..." } else { "Analyze Text" }
                                }}
                            </button>
                            <Show when=move || !input.get().is_empty()>
                                <button class="btn" on:click=on_clear disabled=move || analyzing.get()>
                                    "Clear"
                                </button>
                            </Show>
                        </div>
                    </section>

                    <section class="panel">
                        {move || match result.get() {
                            Some(report) => {
                                view! {
                                    <div class="text-result">
                                        <h2 class="panel__title">"Result"</h2>
                                        <p class="text-result__verdict">{report.verdict.label()}</p>
                                        <ConfidenceBar label="Confidence" value=report.confidence/>
                                        <ul class="text-result__metrics">
                                            {report
                                                .metrics
                                                .iter()
                                                .map(|m| {
                                                    view! {
                                                        <li>
                                                            <span>{m.name.clone()}</span>
                                                            <span>{m.value.to_string()}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                        <ul class="text-result__indicators">
                                            {report
                                                .indicators
                                                .iter()
                                                .map(|line| view! { <li>{line.clone()}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <div class="panel__empty">
                                        <h3>"Ready for Text Analysis"</h3>
                                        <p>
                                            "Enter text and run the analysis to see deception metrics here."
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </section>
                </div>
            </div>
        </AppShell>
    }
}
