use super::*;

#[test]
fn format_elapsed_pads_seconds() {
    assert_eq!(format_elapsed(0), "0:00");
    assert_eq!(format_elapsed(9), "0:09");
    assert_eq!(format_elapsed(65), "1:05");
    assert_eq!(format_elapsed(600), "10:00");
}

#[test]
fn format_timestamp_renders_utc_minutes() {
    // 2024-01-15 12:30:00 UTC
    assert_eq!(format_timestamp(1_705_321_800_000), "2024-01-15 12:30");
}

#[test]
fn format_timestamp_handles_out_of_range_input() {
    assert_eq!(format_timestamp(i64::MAX), "unknown");
}

#[test]
fn format_relative_picks_the_coarsest_unit() {
    let now = 1_705_321_800_000;
    assert_eq!(format_relative(now, now), "just now");
    assert_eq!(format_relative(now, now - 30 * 1000), "just now");
    assert_eq!(format_relative(now, now - 5 * 60 * 1000), "5 minutes ago");
    assert_eq!(format_relative(now, now - 60 * 60 * 1000), "1 hour ago");
    assert_eq!(format_relative(now, now - 2 * 60 * 60 * 1000), "2 hours ago");
    assert_eq!(format_relative(now, now - 26 * 60 * 60 * 1000), "1 day ago");
    assert_eq!(format_relative(now, now - 3 * 24 * 60 * 60 * 1000), "3 days ago");
}

#[test]
fn format_relative_clamps_future_timestamps() {
    assert_eq!(format_relative(0, 60_000), "just now");
}

#[test]
fn format_percent_rounds_to_whole_numbers() {
    assert_eq!(format_percent(0.87), "87%");
    assert_eq!(format_percent(0.005), "1%");
    assert_eq!(format_percent(0.0), "0%");
    assert_eq!(format_percent(1.0), "100%");
}
