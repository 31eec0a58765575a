//! Page-embedded configuration.
//!
//! The static page may carry a `<script type="application/json" id="folio-config">`
//! block overriding any of these fields. Everything is optional; an absent
//! block yields [`SiteConfig::default`].

use serde::Deserialize;

use crate::error::ClientError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the `<script>` element holding the JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_ID: &str = "themeToggle";
pub const DEFAULT_CONTACT_FORM_ID: &str = "contactForm";
pub const DEFAULT_CONTACT_ENDPOINT: &str = "send_mail.php";
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 5000;
pub const DEFAULT_TYPING_START_MS: u32 = 500;
pub const DEFAULT_TYPING_STEP_MS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Preference store key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Attribute on `<html>` that stylesheets key off.
    pub theme_attribute: String,
    pub toggle_id: String,
    pub contact_form_id: String,
    pub contact_endpoint: String,
    pub notice_timeout_ms: u32,
    pub typing_start_ms: u32,
    pub typing_step_ms: u32,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            contact_form_id: DEFAULT_CONTACT_FORM_ID.to_owned(),
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_owned(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
            typing_start_ms: DEFAULT_TYPING_START_MS,
            typing_step_ms: DEFAULT_TYPING_STEP_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse overrides from a JSON object. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the text is not a JSON object with
    /// the expected field types.
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Configured log level; unknown names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        parse_level(&self.log_level)
    }

    /// Read the embedded config block, falling back to defaults.
    #[cfg(feature = "hydrate")]
    pub fn load() -> Self {
        let raw = crate::util::dom::document()
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                // The logger is not installed yet; go straight to the console.
                web_sys::console::warn_1(&format!("{e}; using defaults").into());
                Self::default()
            }
        }
    }
}

fn parse_level(raw: &str) -> log::Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => log::Level::Error,
        "warn" | "warning" => log::Level::Warn,
        "debug" => log::Level::Debug,
        "trace" => log::Level::Trace,
        _ => log::Level::Info,
    }
}
