//! Crate error type.
//!
//! ERROR HANDLING
//! ==============
//! Browser glue returns `Result<_, ClientError>` and entry points log and
//! continue. Nothing on the page is important enough to abort hydration, so
//! every failure here degrades a single behavior rather than the whole page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised by the interactivity layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// An element the behavior depends on is not in the document.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A DOM or JS call threw.
    #[error("js error: {0}")]
    Js(String),

    /// The HTTP request could not be completed.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The embedded page configuration could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}

impl ClientError {
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ClientError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
