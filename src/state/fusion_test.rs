use super::*;

const NOW_MS: i64 = 1_705_321_800_000;

#[test]
fn mock_history_spans_ten_days() {
    let history = mock_history(NOW_MS);
    assert_eq!(history.len(), 10);
}

#[test]
fn mock_history_scores_stay_in_unit_range() {
    for point in mock_history(NOW_MS) {
        for value in [point.accuracy, point.voice, point.face, point.text] {
            assert!((0.0..=1.0).contains(&value), "{} out of range on {}", value, point.day);
        }
    }
}

#[test]
fn mock_history_ends_today() {
    let history = mock_history(NOW_MS);
    // 2024-01-15 UTC
    assert_eq!(history[9].day, "01-15");
    assert_eq!(history[0].day, "01-06");
}

#[test]
fn polyline_spreads_points_across_the_width() {
    let points = polyline_points(&[0.0, 0.5, 1.0], 100.0, 50.0);
    assert_eq!(points, "0.0,50.0 50.0,25.0 100.0,0.0");
}

#[test]
fn polyline_clamps_out_of_range_samples() {
    let points = polyline_points(&[2.0, -1.0], 10.0, 10.0);
    assert_eq!(points, "0.0,0.0 10.0,10.0");
}

#[test]
fn polyline_needs_at_least_two_samples() {
    assert_eq!(polyline_points(&[0.5], 100.0, 50.0), "");
    assert_eq!(polyline_points(&[], 100.0, 50.0), "");
}
