//! Reports page: history list with search, filters, stats, and CSV export.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::analysis::Verdict;
use crate::components::app_shell::AppShell;
use crate::components::stat_card::StatCard;
use crate::state::reports::{
    ReportFilter, ReportKind, filter_reports, parse_kind_filter, parse_verdict_filter,
    report_stats, reports_to_csv, seed_reports,
};
use crate::state::session::use_session;
use crate::util::clock::now_ms;
use crate::util::download::download_text;
use crate::util::format::format_timestamp;
use crate::util::guard::install_unauth_redirect;

const EXPORT_FILENAME: &str = "lie-detection-reports.csv";

#[component]
pub fn ReportsPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    // Fabricated once at mount; filtered in memory, never persisted.
    let reports = RwSignal::new(seed_reports(now_ms()));
    let search = RwSignal::new(String::new());
    let kind_filter = RwSignal::new(None::<ReportKind>);
    let verdict_filter = RwSignal::new(None::<Verdict>);

    let active_filter = move || ReportFilter {
        search: search.get(),
        kind: kind_filter.get(),
        verdict: verdict_filter.get(),
    };
    let filtered = move || filter_reports(&reports.get(), &active_filter());

    let stats = report_stats(&reports.get_untracked());

    let on_export = move |_| {
        let csv = reports_to_csv(&filtered());
        download_text(EXPORT_FILENAME, "text/csv", &csv);
    };

    view! {
        <AppShell>
            <div class="reports-page">
                <header>
                    <h1>"Reports & Analytics"</h1>
                    <p class="page-subtitle">
                        "View and analyze your lie detection history and performance metrics"
                    </p>
                </header>

                <div class="reports-page__stats">
                    <StatCard label="Total Reports" value=stats.total.to_string() accent="blue"/>
                    <StatCard
                        label="Truth Detected"
                        value=stats.truth_count.to_string()
                        accent="green"
                    />
                    <StatCard label="Lies Detected" value=stats.lie_count.to_string() accent="red"/>
                    <StatCard
                        label="Avg Confidence"
                        value=format!("{}%", stats.avg_confidence)
                        accent="purple"
                    />
                </div>

                <section class="panel">
                    <h2 class="panel__title">"Filters & Search"</h2>
                    <div class="reports-page__filters">
                        <input
                            class="filter-input"
                            type="text"
                            placeholder="Search reports..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <select
                            class="filter-select"
                            on:change=move |ev| {
                                kind_filter.set(parse_kind_filter(&event_target_value(&ev)));
                            }
                        >
                            <option value="all">"All Types"</option>
                            {ReportKind::ALL
                                .into_iter()
                                .map(|kind| {
                                    view! { <option value=kind.label()>{kind.label()}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        <select
                            class="filter-select"
                            on:change=move |ev| {
                                verdict_filter.set(parse_verdict_filter(&event_target_value(&ev)));
                            }
                        >
                            <option value="all">"All Results"</option>
                            <option value="Truth">"Truth"</option>
                            <option value="Lie">"Lie"</option>
                        </select>
                        <button class="btn" on:click=on_export>
                            "Export CSV"
                        </button>
                    </div>
                </section>

                <section class="panel panel--flush">
                    <h2 class="panel__title">"Analysis Reports"</h2>
                    <p class="panel__hint">
                        {move || {
                            format!("{} of {} reports shown", filtered().len(), reports.get().len())
                        }}
                    </p>
                    {move || {
                        let rows = filtered();
                        if rows.is_empty() {
                            let message = if active_filter().is_restrictive() {
                                "Try adjusting your filters or search terms"
                            } else {
                                "Start analyzing to see your reports here"
                            };
                            view! {
                                <div class="panel__empty">
                                    <h3>"No Reports Found"</h3>
                                    <p>{message}</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            rows.into_iter()
                                .map(|report| {
                                    let dot_class = if report.verdict == Verdict::Truth {
                                        "report-row__dot report-row__dot--truth"
                                    } else {
                                        "report-row__dot report-row__dot--lie"
                                    };
                                    let verdict_class = if report.verdict == Verdict::Truth {
                                        "report-row__verdict report-row__verdict--truth"
                                    } else {
                                        "report-row__verdict report-row__verdict--lie"
                                    };
                                    let timing = match report.duration_secs {
                                        Some(secs) => {
                                            format!(
                                                "{} \u{2022} {}s",
                                                format_timestamp(report.timestamp_ms),
                                                secs,
                                            )
                                        }
                                        None => format_timestamp(report.timestamp_ms),
                                    };
                                    view! {
                                        <div class="report-row">
                                            <span class=dot_class></span>
                                            <div class="report-row__body">
                                                <p class="report-row__title">
                                                    {format!("{} Analysis", report.kind.label())}
                                                    <span class="report-row__id">
                                                        {format!("#{}", report.id)}
                                                    </span>
                                                </p>
                                                <p class="report-row__timing">{timing}</p>
                                                <p class="report-row__notes">{report.notes.clone()}</p>
                                            </div>
                                            <div class="report-row__outcome">
                                                <p class=verdict_class>{report.verdict.label()}</p>
                                                <p class="report-row__confidence">
                                                    {format!("{}% confidence", report.confidence)}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </section>
            </div>
        </AppShell>
    }
}
