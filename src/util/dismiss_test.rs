use super::*;

#[test]
fn fade_starts_at_three_seconds() {
    assert_eq!(FADE_DELAY_MS, 3000);
}

#[test]
fn removal_follows_half_a_second_after_fade() {
    assert_eq!(REMOVE_DELAY_MS, 500);
    assert_eq!(FADE_DELAY_MS + REMOVE_DELAY_MS, 3500);
}

#[test]
fn visible_phase_keeps_stylesheet_opacity() {
    assert_eq!(opacity(DismissPhase::Visible), "");
}

#[test]
fn fading_and_removed_phases_zero_opacity() {
    assert_eq!(opacity(DismissPhase::Fading), "0");
    assert_eq!(opacity(DismissPhase::Removed), "0");
}

#[test]
fn default_phase_is_visible() {
    assert_eq!(DismissPhase::default(), DismissPhase::Visible);
}
