//! Report history model: mock dataset, in-memory filtering, stats, export.
//!
//! DESIGN
//! ======
//! Reports are client-fabricated at page mount and never written to any
//! store. Filtering and statistics operate on the in-memory list only.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use serde::{Deserialize, Serialize};

use crate::analysis::Verdict;
use crate::util::format::format_timestamp;

/// Analysis category a report row belongs to.
///
/// `Handwriting` survives from an earlier product iteration; historical rows
/// keep the label even though the live pages analyze text instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    Voice,
    Face,
    Handwriting,
    Fusion,
}

impl ReportKind {
    pub const ALL: [Self; 4] = [Self::Voice, Self::Face, Self::Handwriting, Self::Fusion];

    pub fn label(self) -> &'static str {
        match self {
            Self::Voice => "Voice",
            Self::Face => "Face",
            Self::Handwriting => "Handwriting",
            Self::Fusion => "Fusion",
        }
    }
}

/// One past analysis in the history list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub id: String,
    pub kind: ReportKind,
    pub verdict: Verdict,
    /// Whole-number percentage.
    pub confidence: u8,
    pub timestamp_ms: i64,
    pub duration_secs: Option<u32>,
    pub notes: String,
}

/// The fabricated dataset shown until a real history backend exists.
/// Timestamps are offsets from `now_ms` so the list always looks recent.
pub fn seed_reports(now_ms: i64) -> Vec<Report> {
    const HOUR_MS: i64 = 60 * 60 * 1000;
    const DAY_MS: i64 = 24 * HOUR_MS;
    let row = |id: &str,
               kind: ReportKind,
               verdict: Verdict,
               confidence: u8,
               age_ms: i64,
               duration_secs: Option<u32>,
               notes: &str| Report {
        id: id.to_owned(),
        kind,
        verdict,
        confidence,
        timestamp_ms: now_ms - age_ms,
        duration_secs,
        notes: notes.to_owned(),
    };

    vec![
        row(
            "1",
            ReportKind::Voice,
            Verdict::Truth,
            87,
            2 * HOUR_MS,
            Some(45),
            "Clear speech patterns, consistent pitch",
        ),
        row(
            "2",
            ReportKind::Face,
            Verdict::Lie,
            73,
            5 * HOUR_MS,
            Some(120),
            "Micro-expressions detected, eye movement patterns",
        ),
        row(
            "3",
            ReportKind::Handwriting,
            Verdict::Truth,
            91,
            DAY_MS,
            None,
            "Consistent pressure and slant",
        ),
        row(
            "4",
            ReportKind::Fusion,
            Verdict::Truth,
            84,
            2 * DAY_MS,
            Some(180),
            "Combined analysis from all three methods",
        ),
        row(
            "5",
            ReportKind::Voice,
            Verdict::Lie,
            68,
            3 * DAY_MS,
            Some(60),
            "Irregular pitch variations detected",
        ),
        row(
            "6",
            ReportKind::Face,
            Verdict::Truth,
            79,
            4 * DAY_MS,
            Some(90),
            "Natural facial expressions observed",
        ),
    ]
}

/// Active filter selections on the reports page. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub search: String,
    pub kind: Option<ReportKind>,
    pub verdict: Option<Verdict>,
}

impl ReportFilter {
    /// True when any control narrows the list, for empty-state messaging.
    pub fn is_restrictive(&self) -> bool {
        !self.search.is_empty() || self.kind.is_some() || self.verdict.is_some()
    }

    pub fn matches(&self, report: &Report) -> bool {
        if let Some(kind) = self.kind {
            if report.kind != kind {
                return false;
            }
        }
        if let Some(verdict) = self.verdict {
            if report.verdict != verdict {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        report.kind.label().to_lowercase().contains(&needle)
            || report.verdict.label().to_lowercase().contains(&needle)
            || report.notes.to_lowercase().contains(&needle)
    }
}

/// `<select>` value for the type filter; `"all"` clears it.
pub fn parse_kind_filter(value: &str) -> Option<ReportKind> {
    ReportKind::ALL.into_iter().find(|kind| kind.label() == value)
}

/// `<select>` value for the verdict filter; `"all"` clears it.
pub fn parse_verdict_filter(value: &str) -> Option<Verdict> {
    match value {
        "Truth" => Some(Verdict::Truth),
        "Lie" => Some(Verdict::Lie),
        _ => None,
    }
}

pub fn filter_reports(reports: &[Report], filter: &ReportFilter) -> Vec<Report> {
    reports.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Aggregates for the stats card row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub truth_count: usize,
    pub lie_count: usize,
    /// Mean confidence over all rows, rounded; zero for an empty list.
    pub avg_confidence: u32,
}

pub fn report_stats(reports: &[Report]) -> ReportStats {
    let total = reports.len();
    let truth_count = reports.iter().filter(|r| r.verdict == Verdict::Truth).count();
    let sum: u64 = reports.iter().map(|r| u64::from(r.confidence)).sum();
    let avg_confidence = if total == 0 {
        0
    } else {
        ((sum as f64 / total as f64).round()) as u32
    };
    ReportStats { total, truth_count, lie_count: total - truth_count, avg_confidence }
}

/// Comma-separated export of the (filtered) report list. Plain joins, no
/// quoting; the export carries no format versioning or schema guarantees.
pub fn reports_to_csv(reports: &[Report]) -> String {
    let mut rows = vec!["ID,Type,Result,Confidence,Timestamp,Duration,Notes".to_owned()];
    for report in reports {
        let duration = report
            .duration_secs
            .map_or_else(|| "N/A".to_owned(), |secs| format!("{secs}s"));
        rows.push(format!(
            "{},{},{},{}%,{},{},{}",
            report.id,
            report.kind.label(),
            report.verdict.label(),
            report.confidence,
            format_timestamp(report.timestamp_ms),
            duration,
            report.notes,
        ));
    }
    rows.join("\n")
}
