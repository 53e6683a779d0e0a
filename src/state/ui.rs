#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shared UI state for the editor shell.
///
/// The click counter is the only stateful value: owned by `App`, initialized
/// to zero, incremented by every wired button, never persisted. It exists to
/// demonstrate reactivity, not to model anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub click_count: u64,
}

impl UiState {
    /// Record one click on any counter-wired button.
    ///
    /// Each call increments the count by exactly one; the count never
    /// decreases within a session.
    pub fn record_click(&mut self) {
        self.click_count += 1;
    }
}
