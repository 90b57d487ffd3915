use super::*;

// =============================================================
// parse_count
// =============================================================

#[test]
fn parse_count_reads_plain_integers() {
    assert_eq!(parse_count("100"), Some(100));
    assert_eq!(parse_count("0"), Some(0));
}

#[test]
fn parse_count_trims_whitespace_and_accepts_plus_sign() {
    assert_eq!(parse_count("  42 "), Some(42));
    assert_eq!(parse_count("+7"), Some(7));
}

#[test]
fn parse_count_ignores_trailing_garbage() {
    assert_eq!(parse_count("40px"), Some(40));
}

#[test]
fn parse_count_rejects_digit_free_input() {
    assert_eq!(parse_count(""), None);
    assert_eq!(parse_count("abc"), None);
    assert_eq!(parse_count("+"), None);
}

#[test]
fn parse_count_rejects_negative_counts() {
    assert_eq!(parse_count("-5"), None);
}

// =============================================================
// fill_percent
// =============================================================

#[test]
fn fill_percent_is_scraped_over_limit() {
    assert!((fill_percent(40, 100) - 40.0).abs() < f64::EPSILON);
}

#[test]
fn fill_percent_caps_at_one_hundred() {
    assert!((fill_percent(150, 100) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn fill_percent_zero_limit_reads_as_zero() {
    assert!((fill_percent(0, 0)).abs() < f64::EPSILON);
    assert!((fill_percent(5, 0)).abs() < f64::EPSILON);
}

// =============================================================
// width_from_attrs
// =============================================================

#[test]
fn width_matches_scraped_ratio() {
    assert_eq!(width_from_attrs("100", "40"), Some("40%".to_owned()));
}

#[test]
fn width_is_clamped_when_over_limit() {
    assert_eq!(width_from_attrs("100", "150"), Some("100%".to_owned()));
}

#[test]
fn width_zero_limit_is_zero_percent() {
    assert_eq!(width_from_attrs("0", "10"), Some("0%".to_owned()));
}

#[test]
fn width_is_skipped_on_unparsable_attributes() {
    assert_eq!(width_from_attrs("abc", "40"), None);
    assert_eq!(width_from_attrs("100", ""), None);
}
