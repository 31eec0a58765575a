use super::*;

#[test]
fn ui_state_default_is_unresolved() {
    let state = UiState::default();
    assert_eq!(state.theme, None);
    assert!(!state.menu_open);
    assert!(state.active_filter.is_empty());
}

#[test]
fn active_theme_defaults_to_light() {
    let mut state = UiState::default();
    assert_eq!(state.active_theme(), Theme::Light);
    state.theme = Some(Theme::Dark);
    assert_eq!(state.active_theme(), Theme::Dark);
}
