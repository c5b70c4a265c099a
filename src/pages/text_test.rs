use super::*;

#[test]
fn can_analyze_requires_min_length() {
    assert!(!can_analyze(""));
    assert!(!can_analyze("short"));
    assert!(can_analyze("a statement that is long enough"));
}

#[test]
fn can_analyze_rejects_whitespace_only_input() {
    assert!(!can_analyze("            "));
}

#[test]
fn char_count_hint_reports_length() {
    assert_eq!(char_count_hint(0), "0 characters \u{2022} Minimum 50 characters recommended");
    assert_eq!(char_count_hint(123), "123 characters \u{2022} Minimum 50 characters recommended");
}
