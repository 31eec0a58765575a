//! Thin web-sys helpers: lookup, class and style mutation, error reporting.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::ClientError;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Log a failed DOM call with some context and carry on.
pub fn report<T>(context: &str, result: Result<T, ClientError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{context}: {e}");
            None
        }
    }
}

/// First element matching `selector`, or `None` (selector errors included).
pub fn query(selector: &str) -> Option<Element> {
    let doc = document()?;
    match doc.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("bad selector {selector:?}: {}", ClientError::from(e));
            None
        }
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let list = match doc.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("bad selector {selector:?}: {}", ClientError::from(e));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub fn add_class(el: &Element, class: &str) {
    report("classList.add", el.class_list().add_1(class).map_err(ClientError::from));
}

pub fn remove_class(el: &Element, class: &str) {
    report("classList.remove", el.class_list().remove_1(class).map_err(ClientError::from));
}

pub fn toggle_class(el: &Element, class: &str) -> bool {
    report("classList.toggle", el.class_list().toggle(class).map_err(ClientError::from)).unwrap_or(false)
}

/// Set one inline style property. Non-HTML elements are skipped.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        report(
            "style.setProperty",
            html.style().set_property(property, value).map_err(ClientError::from),
        );
    }
}

/// Replace the whole inline style.
pub fn set_css_text(el: &Element, css: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_css_text(css);
    }
}

/// Append a `<style>` block to `<head>`.
pub fn inject_style(css: &str) -> Result<(), ClientError> {
    let doc = document().ok_or_else(|| ClientError::missing("document"))?;
    let head = doc.head().ok_or_else(|| ClientError::missing("head"))?;
    let style = doc.create_element("style")?;
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}

/// Current vertical scroll offset of the window.
pub fn scroll_top() -> f64 {
    window().map_or(0.0, |w| report("scrollY", w.scroll_y().map_err(ClientError::from)).unwrap_or(0.0))
}
