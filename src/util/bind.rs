//! Event listener registration.
//!
//! Every page behavior is a (selector, event, handler) triple registered once
//! at boot. Bindings share no state, so there is nothing to coordinate:
//! closures are handed to the browser and leaked for the page lifetime.

use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Element, Event, EventTarget};

use crate::error::ClientError;
use crate::util::dom;

/// Attach `handler` to `target` until the page unloads.
pub fn on_target(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> bool {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let added = target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(ClientError::from);
    if dom::report(&format!("addEventListener({event})"), added).is_some() {
        cb.forget();
        true
    } else {
        false
    }
}

pub fn on_element(el: &Element, event: &str, handler: impl FnMut(Event) + 'static) -> bool {
    on_target(el.as_ref(), event, handler)
}

pub fn on_window(event: &str, handler: impl FnMut(Event) + 'static) -> bool {
    match dom::window() {
        Some(window) => on_target(window.as_ref(), event, handler),
        None => false,
    }
}

/// Bind `handler` to `event` on every element matching `selector`.
///
/// The handler receives the bound element (not the event target, which may
/// be a descendant). Returns how many elements were bound.
pub fn bind_all(selector: &str, event: &str, handler: impl Fn(&Element, &Event) + 'static) -> usize {
    let handler = Rc::new(handler);
    let mut bound = 0;
    for el in dom::query_all(selector) {
        let handler = Rc::clone(&handler);
        let target = el.clone();
        if on_element(&el, event, move |ev| handler(&target, &ev)) {
            bound += 1;
        }
    }
    if bound == 0 {
        log::debug!("no elements bound for {selector:?} ({event})");
    }
    bound
}
