//! Page boot: create the application state and install every behavior.

use leptos::prelude::RwSignal;

use crate::config::SiteConfig;
use crate::state::ui::UiState;

/// Hydrate the static page.
///
/// The theme is resolved first so the correct palette is on screen before
/// any animation starts. Everything else is independent.
pub fn boot(config: SiteConfig) {
    let ui = RwSignal::new(UiState::default());

    crate::theme::mount(&config, ui);
    crate::behaviors::install_all(&config, ui);
    crate::net::contact::install(&config);

    log::info!("page hydrated");
}
