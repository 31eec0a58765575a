//! In-memory seams for running [`super::ThemeController`] without a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{PreferenceStore, ThemeSurface};
use crate::error::ClientError;
use crate::state::theme::{Theme, ThemeIcon};

/// Preference store backed by a `HashMap`. Counts writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `key = value`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// A store whose writes always fail, like a full or disabled localStorage.
    pub fn read_only() -> Self {
        Self { reject_writes: true, ..Self::default() }
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        if self.reject_writes {
            return Err(ClientError::Js("QuotaExceededError".to_owned()));
        }
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Surface that records the last theme and icon it was given.
#[derive(Debug)]
pub struct RecordingSurface {
    theme: Cell<Option<Theme>>,
    icon: Cell<Option<ThemeIcon>>,
    has_icon: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self { theme: Cell::new(None), icon: Cell::new(None), has_icon: true }
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page without the icon element.
    pub fn without_icon() -> Self {
        Self { has_icon: false, ..Self::default() }
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme.get()
    }

    pub fn icon(&self) -> Option<ThemeIcon> {
        self.icon.get()
    }
}

impl ThemeSurface for RecordingSurface {
    fn set_theme(&self, theme: Theme) -> Result<(), ClientError> {
        self.theme.set(Some(theme));
        Ok(())
    }

    fn set_icon(&self, icon: ThemeIcon) -> Result<(), ClientError> {
        if !self.has_icon {
            return Err(ClientError::missing("theme icon"));
        }
        self.icon.set(Some(icon));
        Ok(())
    }
}
