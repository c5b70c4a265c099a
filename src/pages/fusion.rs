//! Fusion dashboard: combined verdict, mock history chart, demo walkthrough.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::analysis::{FusionReport, ProviderHandle};
use crate::components::analysis_nav::AnalysisNavigation;
use crate::components::app_shell::AppShell;
use crate::components::confidence_bar::ConfidenceBar;
use crate::components::demo_mode::DemoMode;
use crate::state::fusion::{mock_history, polyline_points};
use crate::state::session::use_session;
use crate::util::clock::now_ms;
use crate::util::format::format_percent;
use crate::util::guard::install_unauth_redirect;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 180.0;

const SERIES: [(&str, &str); 4] = [
    ("accuracy", "Accuracy"),
    ("voice", "Voice"),
    ("face", "Face"),
    ("text", "Text"),
];

#[component]
pub fn FusionDashboardPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());
    let provider = expect_context::<ProviderHandle>();

    let fusion_result = RwSignal::new(None::<FusionReport>);
    let analyzing = RwSignal::new(false);

    let history = mock_history(now_ms());

    let on_run = move |_| {
        if analyzing.get() {
            return;
        }
        analyzing.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::util::latency::artificial_delay(crate::net::endpoints::ANALYSIS_DELAY_MS).await;
            match provider.0.fusion() {
                Ok(report) => fusion_result.set(Some(report)),
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

    let on_demo_complete = Callback::new(move |report: FusionReport| {
        fusion_result.set(Some(report));
    });

    let series_points: Vec<(&str, String)> = {
        let collect = |select: fn(&crate::state::fusion::HistoryPoint) -> f64| {
            let values: Vec<f64> = history.iter().map(select).collect();
            polyline_points(&values, CHART_WIDTH, CHART_HEIGHT)
        };
        vec![
            ("accuracy", collect(|p| p.accuracy)),
            ("voice", collect(|p| p.voice)),
            ("face", collect(|p| p.face)),
            ("text", collect(|p| p.text)),
        ]
    };

    view! {
        <AppShell>
            <div class="analysis-page">
                <AnalysisNavigation/>
                <header>
                    <h1>"Fusion Dashboard"</h1>
                    <p class="page-subtitle">
                        "Combine results from every detection method for a single verdict"
                    </p>
                </header>

                <section class="panel">
                    <h2 class="panel__title">"Multi-Modal Fusion Analysis"</h2>
                    <p class="panel__hint">
                        "Fuses the latest voice, face, and text results into one weighted verdict"
                    </p>
                    <button
                        class="btn btn--primary"
                        on:click=on_run
                        disabled=move || analyzing.get()
                    >
                        {move || {
                            if analyzing.get() { "Fusing Results..." } else { "Run Fusion Analysis" }
                        }}
                    </button>
                </section>

                {move || {
                    fusion_result
                        .get()
                        .map(|report| {
                            view! {
                                <section class="panel fusion-result">
                                    <h2 class="panel__title">"Combined Verdict"</h2>
                                    <p class="fusion-result__verdict">{report.verdict.label()}</p>
                                    <p class="fusion-result__overall">
                                        {format!(
                                            "Overall confidence {}",
                                            format_percent(report.confidence),
                                        )}
                                    </p>
                                    <div class="fusion-result__bars">
                                        <ConfidenceBar label="Voice" value=report.voice.confidence/>
                                        <ConfidenceBar label="Face" value=report.face.confidence/>
                                        <ConfidenceBar label="Text" value=report.text.confidence/>
                                        <ConfidenceBar
                                            label="Weighted score"
                                            value=report.weighted_score
                                        />
                                    </div>
                                </section>
                            }
                        })
                }}

                <section class="panel">
                    <h2 class="panel__title">"Ten-Day Accuracy History"</h2>
                    <svg
                        class="history-chart"
                        viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                        preserveAspectRatio="none"
                    >
                        {series_points
                            .into_iter()
                            .map(|(key, points)| {
                                view! {
                                    <polyline
                                        class=format!(
                                            "history-chart__line history-chart__line--{key}",
                                        )
                                        points=points
                                    ></polyline>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </svg>
                    <div class="history-chart__days">
                        {history
                            .iter()
                            .map(|point| view! { <span>{point.day.clone()}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="history-chart__legend">
                        {SERIES
                            .into_iter()
                            .map(|(key, label)| {
                                view! {
                                    <span class=format!(
                                        "history-chart__swatch history-chart__swatch--{key}",
                                    )>{label}</span>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="panel">
                    <DemoMode on_complete=on_demo_complete/>
                </section>
            </div>
        </AppShell>
    }
}
