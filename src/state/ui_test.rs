use super::*;

#[test]
fn defaults_closed() {
    let ui = UiState::default();
    assert!(!ui.history_open);
    assert!(!ui.confirm_clear);
}

#[test]
fn toggle_opens_and_closes() {
    let mut ui = UiState::default();
    ui.toggle_history();
    assert!(ui.history_open);
    ui.toggle_history();
    assert!(!ui.history_open);
}

#[test]
fn closing_dismisses_pending_confirm() {
    let mut ui = UiState { history_open: true, confirm_clear: true };
    ui.close_history();
    assert!(!ui.history_open);
    assert!(!ui.confirm_clear);
}
