//! Cosmetic effects: click ripples, parallax icons, the hero typing
//! animation and entrance sequence, form focus highlighting, social link
//! hover, and the CV download notice.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

pub const RIPPLE_SELECTOR: &str = ".btn, .filter-btn, .project-link";
pub const RIPPLE_LIFETIME_MS: u32 = 600;

pub const HERO_SELECTORS: [&str; 5] =
    [".hero-title", ".hero-subtitle", ".hero-description", ".hero-buttons", ".social-links"];
pub const HERO_STEP_MS: u32 = 200;
pub const HERO_ANIMATION: &str = "fadeInUp 0.8s ease forwards";

pub const SOCIAL_HOVER_IN: &str = "translateY(-3px) scale(1.1)";
pub const SOCIAL_HOVER_OUT: &str = "translateY(0) scale(1)";

pub const CV_NOTICE: &str = "CV download started!";
pub const CV_NOTICE_DELAY_MS: u32 = 500;

/// Bounding box of the clicked element, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A circle centred on the click, large enough to cover the element once
/// scaled by the `ripple` keyframes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    pub fn from_click(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self { size, x: client_x - rect.left - size / 2.0, y: client_y - rect.top - size / 2.0 }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {x}px; top: {y}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

/// Deeper icons move faster.
pub fn parallax_speed(index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let depth = index as f64;
    0.2 + depth * 0.1
}

pub fn parallax_offset(scrolled: f64, index: usize) -> f64 {
    -(scrolled * parallax_speed(index))
}

pub fn parallax_transform(scrolled: f64, index: usize) -> String {
    format!("translateY({}px)", parallax_offset(scrolled, index))
}

/// A form field keeps its `focused` highlight on blur only while it has a value.
pub fn keeps_focus_style(value: &str) -> bool {
    !value.is_empty()
}

/// Successive prefixes of an HTML fragment, one visible character longer
/// each step. Tags and character references are emitted whole so the
/// markup is never split mid-token.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    end: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), end: 0 }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.end >= self.text.len()
    }

    fn token_len(rest: &str) -> usize {
        let Some(first) = rest.chars().next() else {
            return 0;
        };
        match first {
            '<' => rest.find('>').map_or(1, |close| close + 1),
            '&' => match rest.find(';') {
                Some(semi) if semi > 1 && semi <= 10 && rest[1..semi].chars().all(|c| c.is_ascii_alphanumeric() || c == '#') => {
                    semi + 1
                }
                _ => 1,
            },
            c => c.len_utf8(),
        }
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        // Tags are invisible; fold them into the next visible character.
        while self.text[self.end..].starts_with('<') && self.text[self.end..].contains('>') {
            self.end += Self::token_len(&self.text[self.end..]);
        }
        self.end += Self::token_len(&self.text[self.end..]);
        Some(self.text[..self.end].to_owned())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement, MouseEvent};

    use super::*;
    use crate::behaviors::reveal::stagger_delay_ms;
    use crate::components::notification::{self, Notice};
    use crate::config::SiteConfig;
    use crate::error::ClientError;
    use crate::util::{bind, dom};

    pub fn install(config: &SiteConfig) {
        install_ripple();
        install_parallax();
        install_typing(config.typing_start_ms, config.typing_step_ms);
        install_hero_sequence();
        install_focus_highlight();
        install_social_hover();
        install_cv_notice(config.notice_timeout_ms);
    }

    fn install_ripple() {
        bind::bind_all(RIPPLE_SELECTOR, "click", |button, ev| {
            let Some(mouse) = ev.dyn_ref::<MouseEvent>() else {
                return;
            };
            let bounds = button.get_bounding_client_rect();
            let rect = Rect { left: bounds.left(), top: bounds.top(), width: bounds.width(), height: bounds.height() };
            let ripple = Ripple::from_click(rect, f64::from(mouse.client_x()), f64::from(mouse.client_y()));

            let Some(span) = dom::document()
                .and_then(|doc| dom::report("create ripple", doc.create_element("span").map_err(ClientError::from)))
            else {
                return;
            };
            dom::set_css_text(&span, &ripple.css_text());
            dom::set_style(button, "position", "relative");
            dom::set_style(button, "overflow", "hidden");
            if dom::report("append ripple", button.append_child(&span).map_err(ClientError::from)).is_some() {
                Timeout::new(RIPPLE_LIFETIME_MS, move || span.remove()).forget();
            }
        });
    }

    fn install_parallax() {
        if dom::query_all(".floating-icon").is_empty() {
            return;
        }
        bind::on_window("scroll", |_| {
            let scrolled = dom::scroll_top();
            for (i, icon) in dom::query_all(".floating-icon").iter().enumerate() {
                dom::set_style(icon, "transform", &parallax_transform(scrolled, i));
            }
        });
    }

    fn install_typing(start_ms: u32, step_ms: u32) {
        let Some(title) = dom::query(".hero-title") else {
            return;
        };
        let writer = Typewriter::new(title.inner_html());
        title.set_inner_html("");
        Timeout::new(start_ms, move || type_next(title, writer, step_ms)).forget();
    }

    fn type_next(title: Element, mut writer: Typewriter, step_ms: u32) {
        let Some(frame) = writer.next() else {
            return;
        };
        title.set_inner_html(&frame);
        Timeout::new(step_ms, move || type_next(title, writer, step_ms)).forget();
    }

    fn install_hero_sequence() {
        let loaded = dom::document().is_some_and(|doc| doc.ready_state() == "complete");
        if loaded {
            run_hero_sequence();
        } else {
            bind::on_window("load", |_| run_hero_sequence());
        }
    }

    fn run_hero_sequence() {
        if let Some(body) = dom::document().and_then(|doc| doc.body()) {
            dom::add_class(&body, "loaded");
        }
        for (i, selector) in HERO_SELECTORS.iter().enumerate() {
            let Some(el) = dom::query(selector) else {
                continue;
            };
            dom::set_style(&el, "opacity", "0");
            Timeout::new(stagger_delay_ms(i, HERO_STEP_MS), move || {
                dom::set_style(&el, "animation", HERO_ANIMATION);
            })
            .forget();
        }
    }

    fn field_value(field: &Element) -> String {
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn install_focus_highlight() {
        const FIELDS: &str = ".form-group input, .form-group textarea";
        bind::bind_all(FIELDS, "focus", |field, _| {
            if let Some(group) = field.parent_element() {
                dom::add_class(&group, "focused");
            }
        });
        bind::bind_all(FIELDS, "blur", |field, _| {
            if keeps_focus_style(&field_value(field)) {
                return;
            }
            if let Some(group) = field.parent_element() {
                dom::remove_class(&group, "focused");
            }
        });
    }

    fn install_social_hover() {
        bind::bind_all(".social-link", "mouseenter", |link, _| dom::set_style(link, "transform", SOCIAL_HOVER_IN));
        bind::bind_all(".social-link", "mouseleave", |link, _| dom::set_style(link, "transform", SOCIAL_HOVER_OUT));
    }

    fn install_cv_notice(timeout_ms: u32) {
        bind::bind_all(".cv-btn", "click", move |_, _| {
            log::info!("CV download initiated");
            Timeout::new(CV_NOTICE_DELAY_MS, move || notification::show(&Notice::success(CV_NOTICE), timeout_ms))
                .forget();
        });
    }
}
