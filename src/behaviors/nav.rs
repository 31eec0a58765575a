//! Mobile menu, in-page smooth scrolling, and the hide-on-scroll navbar.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scrolling down past this offset hides the navbar.
pub const HIDE_AFTER_PX: f64 = 100.0;
/// Past this offset the navbar gets its opaque `scrolled` background.
pub const SCROLLED_AFTER_PX: f64 = 50.0;

/// Tracks the previous scroll offset to tell scroll direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarScroll {
    last_top: f64,
}

/// What the navbar should look like after a scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarUpdate {
    pub hidden: bool,
    pub scrolled: bool,
}

impl NavbarScroll {
    pub fn last_top(&self) -> f64 {
        self.last_top
    }

    pub fn on_scroll(&mut self, top: f64) -> NavbarUpdate {
        let hidden = top > self.last_top && top > HIDE_AFTER_PX;
        self.last_top = top;
        NavbarUpdate { hidden, scrolled: top > SCROLLED_AFTER_PX }
    }
}

impl NavbarUpdate {
    pub fn transform(self) -> &'static str {
        if self.hidden { "translateY(-100%)" } else { "translateY(0)" }
    }
}

/// Selector to scroll to for an in-page link, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(href) }
}

#[cfg(feature = "hydrate")]
pub use browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::{RwSignal, Update};
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use super::anchor_target;
    use crate::state::ui::UiState;
    use crate::util::{bind, dom};

    pub fn install(ui: RwSignal<UiState>) {
        install_menu(ui);
        install_smooth_scroll();
        install_navbar(ui);
    }

    fn install_menu(ui: RwSignal<UiState>) {
        let (Some(hamburger), Some(menu)) = (dom::query(".hamburger"), dom::query(".nav-menu")) else {
            log::debug!("mobile menu markup not present");
            return;
        };

        let (burger, panel) = (hamburger.clone(), menu.clone());
        bind::on_element(&hamburger, "click", move |_| {
            let open = dom::toggle_class(&panel, "active");
            dom::toggle_class(&burger, "active");
            ui.update(|u| u.menu_open = open);
        });

        bind::bind_all(".nav-link", "click", move |_, _| {
            dom::remove_class(&menu, "active");
            dom::remove_class(&hamburger, "active");
            ui.update(|u| u.menu_open = false);
        });
    }

    fn install_smooth_scroll() {
        bind::bind_all(r##"a[href^="#"]"##, "click", |link, ev| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(dom::query) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }

    fn install_navbar(ui: RwSignal<UiState>) {
        let Some(navbar) = dom::query(".navbar") else {
            log::debug!("navbar not present; scroll effect disabled");
            return;
        };
        bind::on_window("scroll", move |_| {
            let top = dom::scroll_top();
            let Some(update) = ui.try_update(|u| u.navbar.on_scroll(top)) else {
                return;
            };
            dom::set_style(&navbar, "transform", update.transform());
            if update.scrolled {
                dom::add_class(&navbar, "scrolled");
            } else {
                dom::remove_class(&navbar, "scrolled");
            }
        });
    }
}
