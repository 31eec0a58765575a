//! Page behaviors outside the theme controller.
//!
//! Each submodule is a set of independent (selector, event, handler)
//! bindings with a small pure core that the tests cover. None of them
//! depends on another or on the order they are installed in.

pub mod effects;
pub mod filter;
pub mod nav;
pub mod reveal;
pub mod styles;

#[cfg(feature = "hydrate")]
pub use install::install_all;

#[cfg(feature = "hydrate")]
mod install {
    use leptos::prelude::RwSignal;

    use crate::config::SiteConfig;
    use crate::state::ui::UiState;

    /// Register every page behavior. Missing markup disables the affected
    /// behavior only.
    pub fn install_all(config: &SiteConfig, ui: RwSignal<UiState>) {
        super::styles::inject_all();
        super::nav::install(ui);
        super::filter::install(ui);
        super::reveal::install();
        super::effects::install(config);
    }
}
