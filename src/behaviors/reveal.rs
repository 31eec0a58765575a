//! Scroll-triggered reveal animations.
//!
//! Each [`RevealTrigger`] observes a set of elements with an
//! `IntersectionObserver` and mutates an element when it scrolls into view.
//! Triggers marked `once` stop observing an element after the first hit.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// What happens to an element when it becomes visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealAction {
    /// Add a CSS class.
    AddClass(&'static str),
    /// Fill every `.progress` bar to its `data-level`, one after another.
    ProgressBars { step_ms: u32 },
    /// Run the `fadeInUp` animation, delayed by the element's index.
    Stagger { step_ms: u32 },
    /// Swap `data-src` into `src`.
    LazyImage,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    pub name: &'static str,
    pub selector: &'static str,
    /// `None` keeps the browser default of 0.
    pub threshold: Option<f64>,
    pub root_margin: Option<&'static str>,
    pub action: RevealAction,
    pub once: bool,
}

impl RevealTrigger {
    /// Stagger targets start hidden so the animation fades them in.
    pub fn hides_targets_initially(&self) -> bool {
        matches!(self.action, RevealAction::Stagger { .. })
    }
}

pub const FADE_IN_UP: &str = "fadeInUp 0.6s ease forwards";

pub static TRIGGERS: [RevealTrigger; 6] = [
    RevealTrigger {
        name: "progress bars",
        selector: "#about",
        threshold: Some(0.5),
        root_margin: None,
        action: RevealAction::ProgressBars { step_ms: 200 },
        once: true,
    },
    RevealTrigger {
        name: "fade in",
        selector: "section, .project-card, .skill-category, .research-paper",
        threshold: Some(0.1),
        root_margin: Some("0px 0px -50px 0px"),
        action: RevealAction::AddClass("fade-in"),
        once: false,
    },
    RevealTrigger {
        name: "skill stagger",
        selector: ".skill-category",
        threshold: Some(0.5),
        root_margin: None,
        action: RevealAction::Stagger { step_ms: 200 },
        once: false,
    },
    RevealTrigger {
        name: "project stagger",
        selector: ".project-card",
        threshold: Some(0.2),
        root_margin: None,
        action: RevealAction::Stagger { step_ms: 100 },
        once: false,
    },
    RevealTrigger {
        name: "section reveal",
        selector: "section",
        threshold: Some(0.15),
        root_margin: None,
        action: RevealAction::AddClass("section-revealed"),
        once: true,
    },
    RevealTrigger {
        name: "lazy images",
        selector: "img[data-src]",
        threshold: None,
        root_margin: None,
        action: RevealAction::LazyImage,
        once: true,
    },
];

pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// CSS `animation-delay` value for the element at `index`.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", stagger_delay_ms(index, step_ms))
}

#[cfg(feature = "hydrate")]
pub use browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{FADE_IN_UP, RevealAction, RevealTrigger, TRIGGERS, stagger_delay, stagger_delay_ms};
    use crate::error::ClientError;
    use crate::util::dom;

    pub fn install() {
        for trigger in &TRIGGERS {
            match observe(trigger) {
                Ok(count) => log::debug!("{}: observing {count} element(s)", trigger.name),
                Err(e) => log::warn!("{} disabled: {e}", trigger.name),
            }
        }
    }

    fn observe(trigger: &'static RevealTrigger) -> Result<usize, ClientError> {
        let targets = dom::query_all(trigger.selector);
        if targets.is_empty() {
            return Ok(0);
        }

        let indexed = Rc::new(targets.clone());
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let index = indexed.iter().position(|el| *el == target).unwrap_or(0);
                apply(trigger.action, &target, index);
                if trigger.once {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        if let Some(threshold) = trigger.threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = trigger.root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();

        for target in &targets {
            if trigger.hides_targets_initially() {
                dom::set_style(target, "opacity", "0");
            }
            observer.observe(target);
        }
        Ok(targets.len())
    }

    fn apply(action: RevealAction, target: &Element, index: usize) {
        match action {
            RevealAction::AddClass(class) => dom::add_class(target, class),
            RevealAction::ProgressBars { step_ms } => fill_progress_bars(step_ms),
            RevealAction::Stagger { step_ms } => {
                dom::set_style(target, "animation", FADE_IN_UP);
                dom::set_style(target, "animation-delay", &stagger_delay(index, step_ms));
            }
            RevealAction::LazyImage => load_image(target),
        }
    }

    fn fill_progress_bars(step_ms: u32) {
        for (i, bar) in dom::query_all(".progress").into_iter().enumerate() {
            Timeout::new(stagger_delay_ms(i, step_ms), move || {
                if let Some(level) = bar.get_attribute("data-level") {
                    dom::set_style(&bar, "width", &level);
                }
            })
            .forget();
        }
    }

    fn load_image(target: &Element) {
        let Some(img) = target.dyn_ref::<HtmlImageElement>() else {
            return;
        };
        if let Some(src) = img.get_attribute("data-src") {
            img.set_src(&src);
        }
        dom::remove_class(target, "lazy");
    }
}
