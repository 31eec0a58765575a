//! Contact form submission.
//!
//! The form is posted as `multipart/form-data` to a same-origin endpoint that
//! answers `{ "success": bool, "message": string }`. There is no retry and no
//! abort; a transport or decode failure shows one generic message.
//!
//! ERROR HANDLING
//! ==============
//! Nothing local is mutated before the response arrives (apart from the
//! button's busy state, which is always restored), so a failure needs no
//! rollback.

use serde::Deserialize;

use crate::components::notification::Notice;
use crate::error::ClientError;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const GENERIC_FAILURE: &str = "There was a problem submitting the form. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// What the page does once a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactOutcome {
    pub notice: Notice,
    pub reset_form: bool,
}

impl ContactOutcome {
    pub fn from_result(result: Result<ContactResponse, ClientError>) -> Self {
        match result {
            Ok(ContactResponse { success: true, message }) => Self { notice: Notice::success(message), reset_form: true },
            Ok(ContactResponse { success: false, message }) => Self { notice: Notice::error(message), reset_form: false },
            Err(_) => Self { notice: Notice::error(GENERIC_FAILURE), reset_form: false },
        }
    }
}

/// POST the form's fields to `endpoint` and decode the reply.
///
/// # Errors
///
/// Returns [`ClientError::Network`] if the request cannot be sent and
/// [`ClientError::Decode`] if the body is not the expected JSON.
#[cfg(feature = "hydrate")]
pub async fn submit(endpoint: &str, form: &web_sys::HtmlFormElement) -> Result<ContactResponse, ClientError> {
    let data = web_sys::FormData::new_with_form(form)?;
    let resp = gloo_net::http::Request::post(endpoint).body(data)?.send().await?;
    if !(200..300).contains(&resp.status()) {
        log::warn!("contact endpoint answered {}", resp.status());
    }
    Ok(resp.json::<ContactResponse>().await?)
}

#[cfg(feature = "hydrate")]
pub use browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlButtonElement, HtmlFormElement};

    use super::{ContactOutcome, submit};
    use crate::components::notification;
    use crate::config::SiteConfig;
    use crate::error::ClientError;
    use crate::util::{bind, dom};

    pub fn install(config: &SiteConfig) {
        let Some(form) = dom::document()
            .and_then(|doc| doc.get_element_by_id(&config.contact_form_id))
            .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned())
        else {
            log::debug!("no contact form #{}", config.contact_form_id);
            return;
        };

        let endpoint = config.contact_endpoint.clone();
        let timeout_ms = config.notice_timeout_ms;
        let target = form.clone();
        bind::on_element(&target, "submit", move |ev| {
            ev.prevent_default();
            let button = dom::report(
                "submit button lookup",
                form.query_selector(".submit-btn").map_err(ClientError::from),
            )
            .flatten();
            set_busy(button.as_ref(), true);

            let form = form.clone();
            let endpoint = endpoint.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = submit(&endpoint, &form).await;
                if let Err(e) = &result {
                    log::error!("contact submission failed: {e}");
                }
                let outcome = ContactOutcome::from_result(result);
                notification::show(&outcome.notice, timeout_ms);
                if outcome.reset_form {
                    form.reset();
                }
                set_busy(button.as_ref(), false);
            });
        });
    }

    fn set_busy(button: Option<&Element>, busy: bool) {
        let Some(button) = button else {
            return;
        };
        if busy {
            dom::add_class(button, "loading");
        } else {
            dom::remove_class(button, "loading");
        }
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(busy);
        }
    }
}
