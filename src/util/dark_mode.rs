//! Browser implementations of the theme seams.
//!
//! Reads and writes the preference through `localStorage`, queries
//! `prefers-color-scheme: dark` through `matchMedia`, and reflects the active
//! theme as an attribute on `<html>` plus the toggle button's `<i>` icon.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: private browsing or a disabled store degrades to
//! "no saved preference" and failed writes are logged, never surfaced.

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Element, MediaQueryList, MediaQueryListEvent, Storage};

use crate::error::ClientError;
use crate::state::theme::{Theme, ThemeIcon};
use crate::theme::{PreferenceStore, SystemScheme, ThemeSurface};
use crate::util::dom;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`, if the browser grants it.
#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = dom::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", ClientError::from(e));
                None
            }
        });
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read of {key:?} failed: {}", ClientError::from(e));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let storage = self.storage.as_ref().ok_or_else(|| ClientError::missing("localStorage"))?;
        storage.set_item(key, value)?;
        Ok(())
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Debug)]
pub struct MediaScheme {
    list: Option<MediaQueryList>,
}

impl MediaScheme {
    pub fn query() -> Self {
        let list = dom::window().and_then(|w| match w.match_media(DARK_QUERY) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("matchMedia failed: {}", ClientError::from(e));
                None
            }
        });
        Self { list }
    }

    /// Call `handler` with the new value whenever the system scheme changes.
    /// Returns `None` when the query is unavailable.
    pub fn subscribe(&self, handler: impl FnMut(bool) + 'static) -> Option<Subscription> {
        let list = self.list.clone()?;
        let mut handler = handler;
        let callback = Closure::wrap(Box::new(move |ev: MediaQueryListEvent| handler(ev.matches()))
            as Box<dyn FnMut(MediaQueryListEvent)>);
        let added = list
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(ClientError::from);
        dom::report("matchMedia change listener", added)?;
        Some(Subscription { list, callback })
    }
}

impl SystemScheme for MediaScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.list.as_ref().map(MediaQueryList::matches)
    }
}

/// Live `change` listener on the media query. Dropping it unsubscribes.
pub struct Subscription {
    list: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl Subscription {
    /// Keep the listener for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let removed = self
            .list
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref())
            .map_err(ClientError::from);
        dom::report("matchMedia unsubscribe", removed);
    }
}

/// `<html data-theme>` plus the `<i>` inside the toggle button.
#[derive(Clone, Debug)]
pub struct DocumentSurface {
    attribute: String,
    toggle_id: String,
}

impl DocumentSurface {
    pub fn new(attribute: &str, toggle_id: &str) -> Self {
        Self { attribute: attribute.to_owned(), toggle_id: toggle_id.to_owned() }
    }

    fn icon(&self) -> Option<Element> {
        let toggle = dom::document()?.get_element_by_id(&self.toggle_id)?;
        match toggle.query_selector("i") {
            Ok(icon) => icon,
            Err(e) => {
                log::warn!("icon lookup failed: {}", ClientError::from(e));
                None
            }
        }
    }
}

impl ThemeSurface for DocumentSurface {
    fn set_theme(&self, theme: Theme) -> Result<(), ClientError> {
        let root = dom::document()
            .and_then(|doc| doc.document_element())
            .ok_or_else(|| ClientError::missing("<html>"))?;
        root.set_attribute(&self.attribute, theme.as_str())?;
        Ok(())
    }

    fn set_icon(&self, icon: ThemeIcon) -> Result<(), ClientError> {
        let el = self
            .icon()
            .ok_or_else(|| ClientError::missing(format!("#{} i", self.toggle_id)))?;
        el.set_class_name(icon.class_name());
        Ok(())
    }
}
