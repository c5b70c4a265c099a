use super::*;

const NOW_MS: i64 = 1_705_321_800_000;

#[test]
fn seed_reports_are_recent_first() {
    let reports = seed_reports(NOW_MS);
    assert_eq!(reports.len(), 6);
    for pair in reports.windows(2) {
        assert!(pair[0].timestamp_ms >= pair[1].timestamp_ms);
    }
    assert!(reports.iter().all(|r| r.timestamp_ms < NOW_MS));
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn default_filter_matches_everything() {
    let reports = seed_reports(NOW_MS);
    let filter = ReportFilter::default();
    assert_eq!(filter_reports(&reports, &filter).len(), reports.len());
    assert!(!filter.is_restrictive());
}

#[test]
fn search_matches_type_verdict_and_notes_case_insensitively() {
    let reports = seed_reports(NOW_MS);

    let by_type = ReportFilter { search: "voice".to_owned(), ..ReportFilter::default() };
    assert_eq!(filter_reports(&reports, &by_type).len(), 2);

    let by_verdict = ReportFilter { search: "LIE".to_owned(), ..ReportFilter::default() };
    assert_eq!(filter_reports(&reports, &by_verdict).len(), 2);

    let by_notes = ReportFilter { search: "pressure".to_owned(), ..ReportFilter::default() };
    let hits = filter_reports(&reports, &by_notes);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind, ReportKind::Handwriting);
}

#[test]
fn kind_and_verdict_filters_compose_with_search() {
    let reports = seed_reports(NOW_MS);
    let filter = ReportFilter {
        search: "pitch".to_owned(),
        kind: Some(ReportKind::Voice),
        verdict: Some(Verdict::Lie),
    };
    let hits = filter_reports(&reports, &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "5");
    assert!(filter.is_restrictive());
}

#[test]
fn kind_filter_alone_narrows_the_list() {
    let reports = seed_reports(NOW_MS);
    let filter = ReportFilter { kind: Some(ReportKind::Fusion), ..ReportFilter::default() };
    let hits = filter_reports(&reports, &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "4");
}

#[test]
fn select_values_parse_back_to_filters() {
    assert_eq!(parse_kind_filter("Voice"), Some(ReportKind::Voice));
    assert_eq!(parse_kind_filter("Handwriting"), Some(ReportKind::Handwriting));
    assert_eq!(parse_kind_filter("all"), None);
    assert_eq!(parse_verdict_filter("Truth"), Some(Verdict::Truth));
    assert_eq!(parse_verdict_filter("Lie"), Some(Verdict::Lie));
    assert_eq!(parse_verdict_filter("all"), None);
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_partition_by_verdict() {
    let reports = seed_reports(NOW_MS);
    let stats = report_stats(&reports);
    assert_eq!(stats.total, 6);
    assert_eq!(stats.truth_count, 4);
    assert_eq!(stats.lie_count, 2);
    assert_eq!(stats.truth_count + stats.lie_count, stats.total);
}

#[test]
fn stats_mean_confidence_rounds() {
    let reports = seed_reports(NOW_MS);
    // (87 + 73 + 91 + 84 + 68 + 79) / 6 = 80.33...
    assert_eq!(report_stats(&reports).avg_confidence, 80);
}

#[test]
fn stats_on_empty_list_are_zero() {
    let stats = report_stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.avg_confidence, 0);
}

// =============================================================
// CSV export
// =============================================================

#[test]
fn csv_has_header_and_one_row_per_report() {
    let reports = seed_reports(NOW_MS);
    let csv = reports_to_csv(&reports);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), reports.len() + 1);
    assert_eq!(lines[0], "ID,Type,Result,Confidence,Timestamp,Duration,Notes");
}

#[test]
fn csv_renders_confidence_duration_and_missing_duration() {
    let reports = seed_reports(NOW_MS);
    let csv = reports_to_csv(&reports);
    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines[1].starts_with("1,Voice,Truth,87%,"));
    assert!(lines[1].contains(",45s,"));
    // Row 3 (Handwriting) has no duration.
    assert!(lines[3].contains(",N/A,"));
}

#[test]
fn csv_of_empty_list_is_header_only() {
    assert_eq!(reports_to_csv(&[]), "ID,Type,Result,Confidence,Timestamp,Duration,Notes");
}
