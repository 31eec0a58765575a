//! Theme preference: which of light/dark is active, and keeping the
//! document, the toggle icon and the preference store consistent with it.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ThemeController`] owns the decision logic and talks to the browser only
//! through [`PreferenceStore`], [`SystemScheme`] and [`ThemeSurface`]. The
//! browser implementations live in `util::dark_mode`; in-memory
//! ones in [`memory`] back the unit tests.
//!
//! Resolution order at load: stored choice, then system signal, then light.
//! Toggling always persists. System changes apply only while nothing is
//! stored.

mod controller;
pub mod memory;

pub use controller::{PreferenceStore, SystemScheme, ThemeController, ThemeSurface};

#[cfg(feature = "hydrate")]
pub use mount::mount;

#[cfg(feature = "hydrate")]
mod mount {
    use std::rc::Rc;

    use leptos::prelude::{RwSignal, Update};

    use super::ThemeController;
    use crate::config::SiteConfig;
    use crate::state::ui::UiState;
    use crate::util::bind;
    use crate::util::dark_mode::{DocumentSurface, LocalStore, MediaScheme};
    use crate::util::dom;

    /// Resolve the initial theme and wire the toggle click and system
    /// change listeners for the lifetime of the page.
    pub fn mount(config: &SiteConfig, ui: RwSignal<UiState>) {
        let scheme = MediaScheme::query();
        let controller = Rc::new(ThemeController::new(
            LocalStore::open(),
            scheme.clone(),
            DocumentSurface::new(&config.theme_attribute, &config.toggle_id),
            config.storage_key.clone(),
        ));

        ui.update(|u| {
            let theme = controller.resolve_initial_theme(u);
            log::debug!("initial theme: {theme}");
        });

        match dom::document().and_then(|doc| doc.get_element_by_id(&config.toggle_id)) {
            Some(toggle) => {
                let controller = Rc::clone(&controller);
                bind::on_element(&toggle, "click", move |_| {
                    ui.update(|u| {
                        let previous = u.active_theme();
                        let next = controller.toggle_theme(u);
                        log::info!("theme toggled: {previous} -> {next}");
                    });
                });
            }
            None => log::error!("theme toggle #{} not found", config.toggle_id),
        }

        let subscription = scheme.subscribe(move |prefers_dark| {
            ui.update(|u| {
                if let Some(theme) = controller.on_system_theme_change(u, prefers_dark) {
                    log::debug!("system scheme changed, following: {theme}");
                }
            });
        });
        match subscription {
            Some(sub) => sub.forget(),
            None => log::warn!("prefers-color-scheme query unavailable; system changes ignored"),
        }
    }
}
