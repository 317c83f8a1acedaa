#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Chrome state for the page shell: panels and dialogs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub history_open: bool,
    pub confirm_clear: bool,
}

impl UiState {
    pub fn toggle_history(&mut self) {
        self.history_open = !self.history_open;
        if !self.history_open {
            self.confirm_clear = false;
        }
    }

    pub fn close_history(&mut self) {
        self.history_open = false;
        self.confirm_clear = false;
    }
}
