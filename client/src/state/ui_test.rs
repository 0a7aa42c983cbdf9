use super::*;

#[test]
fn ui_state_default_menu_closed_sidebar_open() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert!(state.sidebar_open);
    assert!(!state.dark_mode);
}

#[test]
fn toggle_menu_flips_and_close_menu_resets() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = UiState::default();
    state.close_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

#[test]
fn toggle_sidebar_flips() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
}
