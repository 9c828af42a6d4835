use super::*;

#[test]
fn player_state_default_is_framed() {
    let state = PlayerState::default();
    assert!(!state.fullscreen);
    assert_eq!(state.layout(), PlayerLayout::Framed);
    assert!(state.shows_chrome());
}

#[test]
fn toggle_enters_fullscreen() {
    let mut state = PlayerState::default();
    state.toggle_fullscreen();
    assert_eq!(state.layout(), PlayerLayout::Fullscreen);
    assert!(!state.shows_chrome());
}

#[test]
fn toggling_twice_restores_initial_layout() {
    let initial = PlayerState::default();
    let mut state = initial;
    state.toggle_fullscreen();
    state.toggle_fullscreen();
    assert_eq!(state, initial);
    assert_eq!(state.layout(), initial.layout());
}

#[test]
fn toggle_label_tracks_layout() {
    let mut state = PlayerState::default();
    assert_eq!(state.toggle_label(), "GO FULLSCREEN");
    state.toggle_fullscreen();
    assert_eq!(state.toggle_label(), "EXIT FULLSCREEN");
}
