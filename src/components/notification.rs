//! Toast notifications.
//!
//! At most one toast is visible: showing a new one removes the previous.
//! Each toast closes on its `×` button or by itself after a timeout.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn class_name(&self) -> String {
        format!("notification {}", self.kind.as_str())
    }

    pub fn container_css(&self) -> String {
        format!(
            "position: fixed; top: 90px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 10px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); \
             z-index: 1001; animation: slideInRight 0.3s ease; max-width: 300px;",
            self.kind.background()
        )
    }
}

pub const CONTENT_CSS: &str = "display: flex; align-items: center; justify-content: space-between; gap: 1rem;";
pub const CLOSE_CSS: &str = "background: none; border: none; color: white; font-size: 1.2rem; \
                             cursor: pointer; padding: 0; line-height: 1;";

#[cfg(feature = "hydrate")]
pub use browser::show;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;
    use web_sys::{Document, Element};

    use super::{CLOSE_CSS, CONTENT_CSS, Notice};
    use crate::error::ClientError;
    use crate::util::{bind, dom};

    /// Show `notice`, replacing any visible toast. Failures are logged.
    pub fn show(notice: &Notice, timeout_ms: u32) {
        if let Err(e) = try_show(notice, timeout_ms) {
            log::warn!("notification not shown ({}): {e}", notice.message);
        }
    }

    fn try_show(notice: &Notice, timeout_ms: u32) -> Result<(), ClientError> {
        let doc = dom::document().ok_or_else(|| ClientError::missing("document"))?;
        let body = doc.body().ok_or_else(|| ClientError::missing("body"))?;

        if let Some(existing) = dom::query(".notification") {
            existing.remove();
        }

        let toast = element(&doc, "div", &notice.container_css())?;
        toast.set_class_name(&notice.class_name());

        let content = element(&doc, "div", CONTENT_CSS)?;
        content.set_class_name("notification-content");
        let text = doc.create_element("span")?;
        text.set_text_content(Some(&notice.message));
        let close = element(&doc, "button", CLOSE_CSS)?;
        close.set_class_name("notification-close");
        close.set_text_content(Some("\u{00d7}"));

        content.append_child(&text)?;
        content.append_child(&close)?;
        toast.append_child(&content)?;
        body.append_child(&toast)?;

        let closing = toast.clone();
        bind::on_element(&close, "click", move |_| closing.remove());

        Timeout::new(timeout_ms, move || {
            if toast.parent_node().is_some() {
                toast.remove();
            }
        })
        .forget();
        Ok(())
    }

    fn element(doc: &Document, tag: &str, css: &str) -> Result<Element, ClientError> {
        let el = doc.create_element(tag)?;
        dom::set_css_text(&el, css);
        Ok(el)
    }
}
