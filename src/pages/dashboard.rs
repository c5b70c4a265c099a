//! Dashboard page with quick actions, stats, and recent activity.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::analysis::Verdict;
use crate::components::app_shell::AppShell;
use crate::components::stat_card::StatCard;
use crate::state::reports::seed_reports;
use crate::state::session::use_session;
use crate::util::clock::now_ms;
use crate::util::format::format_relative;
use crate::util::guard::install_unauth_redirect;

const QUICK_ACTIONS: [(&str, &str, &str, &str); 4] = [
    ("/voice-analysis", "Voice Analysis", "Analyze voice patterns for deception detection", "blue"),
    ("/face-analysis", "Face Analysis", "Detect micro-expressions and facial cues", "purple"),
    ("/text-analysis", "Text Analysis", "Analyze written text for deception patterns", "green"),
    ("/fusion-dashboard", "Fusion Results", "Combined analysis from all detection methods", "pink"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    let now = now_ms();
    let recent: Vec<_> = seed_reports(now).into_iter().take(3).collect();

    view! {
        <AppShell>
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>
                        {move || match session.current_identity() {
                            Some(identity) => format!("Welcome back, {}", identity.name),
                            None => "Welcome".to_owned(),
                        }}
                    </h1>
                    <p class="page-subtitle">"Pick a detection method to get started"</p>
                </header>

                <div class="dashboard-page__stats">
                    <StatCard label="Total Analyses" value="24".to_owned() accent="blue"/>
                    <StatCard label="Accuracy Rate" value="94%".to_owned() accent="green"/>
                    <StatCard label="This Month" value="8".to_owned() accent="purple"/>
                    <StatCard label="Completed" value="22".to_owned() accent="pink"/>
                </div>

                <div class="dashboard-page__actions">
                    {QUICK_ACTIONS
                        .into_iter()
                        .map(|(path, title, blurb, accent)| {
                            view! {
                                <a href=path class=format!("action-card action-card--{accent}")>
                                    <h2 class="action-card__title">{title}</h2>
                                    <p class="action-card__blurb">{blurb}</p>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <section class="dashboard-page__recent">
                    <h2>"Recent Analyses"</h2>
                    <div class="recent-list">
                        {recent
                            .into_iter()
                            .map(|report| {
                                let verdict_class = if report.verdict == Verdict::Truth {
                                    "recent-row__verdict recent-row__verdict--truth"
                                } else {
                                    "recent-row__verdict recent-row__verdict--lie"
                                };
                                view! {
                                    <div class="recent-row">
                                        <div class="recent-row__meta">
                                            <span class="recent-row__kind">
                                                {format!("{} Analysis", report.kind.label())}
                                            </span>
                                            <span class="recent-row__time">
                                                {format_relative(now, report.timestamp_ms)}
                                            </span>
                                        </div>
                                        <div class="recent-row__outcome">
                                            <span class=verdict_class>{report.verdict.label()}</span>
                                            <span class="recent-row__confidence">
                                                {format!("{}% confidence", report.confidence)}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </div>
        </AppShell>
    }
}
