//! Project card filtering by category.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Filter value that shows every card.
pub const ALL: &str = "all";

/// How long the fade-out runs before a card is taken out of the layout.
pub const HIDE_DELAY_MS: u32 = 300;

pub const SHOWN_STYLE: [(&str, &str); 3] = [("display", "block"), ("opacity", "1"), ("transform", "translateY(0)")];
pub const FADING_STYLE: [(&str, &str); 2] = [("opacity", "0"), ("transform", "translateY(20px)")];

/// Whether a card with `category` stays visible under `filter`.
pub fn card_matches(filter: &str, category: Option<&str>) -> bool {
    filter == ALL || category == Some(filter)
}

#[cfg(feature = "hydrate")]
pub use browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use leptos::prelude::{RwSignal, Update, WithUntracked};
    use web_sys::Element;

    use super::{FADING_STYLE, HIDE_DELAY_MS, SHOWN_STYLE, card_matches};
    use crate::state::ui::UiState;
    use crate::util::{bind, dom};

    pub fn install(ui: RwSignal<UiState>) {
        let buttons = Rc::new(dom::query_all(".filter-btn"));
        let cards = Rc::new(dom::query_all(".project-card"));
        if buttons.is_empty() {
            return;
        }

        for button in buttons.iter() {
            let buttons = Rc::clone(&buttons);
            let cards = Rc::clone(&cards);
            let clicked = button.clone();
            bind::on_element(button, "click", move |_| {
                for b in buttons.iter() {
                    dom::remove_class(b, "active");
                }
                dom::add_class(&clicked, "active");

                let filter = clicked.get_attribute("data-filter").unwrap_or_default();
                ui.update(|u| u.active_filter.clone_from(&filter));
                for card in cards.iter() {
                    apply(card, &filter, ui);
                }
            });
        }
    }

    fn apply(card: &Element, filter: &str, ui: RwSignal<UiState>) {
        let category = card.get_attribute("data-category");
        if card_matches(filter, category.as_deref()) {
            for (property, value) in SHOWN_STYLE {
                dom::set_style(card, property, value);
            }
            return;
        }

        for (property, value) in FADING_STYLE {
            dom::set_style(card, property, value);
        }
        let card = card.clone();
        Timeout::new(HIDE_DELAY_MS, move || {
            // A later click may have brought the card back during the fade.
            let current = ui.with_untracked(|u| u.active_filter.clone());
            if !card_matches(&current, category.as_deref()) {
                dom::set_style(&card, "display", "none");
            }
        })
        .forget();
    }
}
