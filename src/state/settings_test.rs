use super::*;

#[test]
fn defaults_match_the_product_baseline() {
    let form = SettingsForm::default();
    assert!(form.notifications);
    assert!(form.auto_save);
    assert!(!form.dark_mode);
    assert_eq!(form.confidence_threshold, 75);
    assert_eq!(form.language, Language::English);
}

#[test]
fn parse_threshold_accepts_in_range_values() {
    assert_eq!(parse_threshold("0"), Some(0));
    assert_eq!(parse_threshold("75"), Some(75));
    assert_eq!(parse_threshold("100"), Some(100));
    assert_eq!(parse_threshold(" 42 "), Some(42));
}

#[test]
fn parse_threshold_clamps_out_of_range_values() {
    assert_eq!(parse_threshold("150"), Some(100));
    assert_eq!(parse_threshold("-5"), Some(0));
}

#[test]
fn parse_threshold_rejects_non_numeric_input() {
    assert_eq!(parse_threshold(""), None);
    assert_eq!(parse_threshold("abc"), None);
    assert_eq!(parse_threshold("7.5"), None);
}

#[test]
fn language_codes_round_trip() {
    for lang in Language::ALL {
        assert_eq!(Language::parse(lang.code()), Some(lang));
    }
    assert_eq!(Language::parse("jp"), None);
}
