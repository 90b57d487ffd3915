#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn only_the_literal_true_selects_light() {
    assert!(preference_from_stored(Some("true")));
    assert!(!preference_from_stored(Some("false")));
    assert!(!preference_from_stored(Some("TRUE")));
    assert!(!preference_from_stored(Some("1")));
    assert!(!preference_from_stored(Some("")));
    assert!(!preference_from_stored(None));
}

#[test]
fn stored_values_round_trip() {
    assert_eq!(stored_value(true), "true");
    assert_eq!(stored_value(false), "false");
    assert!(preference_from_stored(Some(stored_value(true))));
    assert!(!preference_from_stored(Some(stored_value(false))));
}

#[test]
fn toggle_flips_in_both_directions() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn read_preference_defaults_to_dark_without_a_browser() {
    assert!(!read_preference());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(true);
    apply(false);
}
