use crate::error::ClientError;
use crate::state::theme::{Theme, ThemeIcon};
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Origin-scoped synchronous key-value store surviving reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the store rejects the write (quota, privacy mode).
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
}

/// OS/browser "prefers dark" signal. `None` when it cannot be queried.
pub trait SystemScheme {
    fn prefers_dark(&self) -> Option<bool>;
}

/// A fixed signal, for tests and environments without media queries.
impl SystemScheme for Option<bool> {
    fn prefers_dark(&self) -> Option<bool> {
        *self
    }
}

/// Where the active theme becomes visible.
pub trait ThemeSurface {
    /// # Errors
    ///
    /// Returns an error when the document root cannot be written.
    fn set_theme(&self, theme: Theme) -> Result<(), ClientError>;

    /// # Errors
    ///
    /// Returns [`ClientError::MissingElement`] when the page has no icon.
    fn set_icon(&self, icon: ThemeIcon) -> Result<(), ClientError>;
}

/// Single writer of the active theme.
#[derive(Debug)]
pub struct ThemeController<P, S, D> {
    store: P,
    system: S,
    surface: D,
    storage_key: String,
}

impl<P, S, D> ThemeController<P, S, D>
where
    P: PreferenceStore,
    S: SystemScheme,
    D: ThemeSurface,
{
    pub fn new(store: P, system: S, surface: D, storage_key: impl Into<String>) -> Self {
        Self { store, system, surface, storage_key: storage_key.into() }
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Whether the user has ever made an explicit choice. Any non-empty
    /// stored value counts, including one this crate cannot parse.
    pub fn has_stored_choice(&self) -> bool {
        self.store.get(&self.storage_key).is_some_and(|v| !v.is_empty())
    }

    /// The stored theme, if it is one this crate understands.
    pub fn stored_theme(&self) -> Option<Theme> {
        let raw = self.store.get(&self.storage_key)?;
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("ignoring stored preference: {e}");
                None
            }
        }
    }

    /// Decide the theme at page load and reflect it. Never writes the store.
    pub fn resolve_initial_theme(&self, ui: &mut UiState) -> Theme {
        let theme = self
            .stored_theme()
            .unwrap_or_else(|| Theme::from_prefers_dark(self.system.prefers_dark().unwrap_or(false)));
        self.reflect(ui, theme);
        theme
    }

    /// Flip the active theme and record it as the user's explicit choice.
    pub fn toggle_theme(&self, ui: &mut UiState) -> Theme {
        let next = ui.active_theme().toggled();
        self.reflect(ui, next);
        if let Err(e) = self.store.set(&self.storage_key, next.as_str()) {
            log::warn!("theme preference not saved: {e}");
        }
        next
    }

    /// Follow a system scheme change unless the user has chosen explicitly.
    ///
    /// Returns the applied theme, or `None` when the event was ignored.
    pub fn on_system_theme_change(&self, ui: &mut UiState, prefers_dark: bool) -> Option<Theme> {
        if self.has_stored_choice() {
            return None;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.reflect(ui, theme);
        Some(theme)
    }

    fn reflect(&self, ui: &mut UiState, theme: Theme) {
        ui.theme = Some(theme);
        if let Err(e) = self.surface.set_theme(theme) {
            log::error!("theme attribute not applied: {e}");
        }
        if let Err(e) = self.surface.set_icon(theme.icon()) {
            log::warn!("theme icon not updated: {e}");
        }
    }
}
