use super::*;

#[test]
fn ui_state_defaults_to_dark() {
    assert!(!UiState::default().light_mode);
}

#[test]
fn ui_state_can_be_seeded_light() {
    assert!(UiState::with_light_mode(true).light_mode);
    assert!(!UiState::with_light_mode(false).light_mode);
}
