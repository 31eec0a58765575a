//! Application state threaded through the page bindings.

use crate::behaviors::nav::NavbarScroll;
use crate::state::theme::Theme;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page-wide UI state, held in a single `RwSignal` created at boot.
///
/// `theme` is written only by [`crate::theme::ThemeController`] operations.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Active theme; `None` until the initial resolution has run.
    pub theme: Option<Theme>,
    pub menu_open: bool,
    pub navbar: NavbarScroll,
    pub active_filter: String,
}

impl UiState {
    /// Active theme, reading an unresolved state as `Light`.
    pub fn active_theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}
