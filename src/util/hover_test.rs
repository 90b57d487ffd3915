use super::*;

#[test]
fn hovered_card_gets_lift_and_shadow() {
    let style = lift(true);
    assert_eq!(style.transform, "translateY(-10px)");
    assert_eq!(style.box_shadow, "0 15px 30px rgba(0, 0, 0, 0.2)");
}

#[test]
fn resting_card_clears_both_inline_properties() {
    let style = lift(false);
    assert_eq!(style.transform, "");
    assert_eq!(style.box_shadow, "");
    assert_eq!(style, CardLift::default());
}

#[test]
fn enter_leave_round_trip_restores_resting_state() {
    let before = lift(false);
    let _hovered = lift(true);
    assert_eq!(lift(false), before);
}

#[test]
fn lift_is_stable_across_repeated_enters() {
    assert_eq!(lift(true), lift(true));
}
