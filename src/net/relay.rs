//! Form-relay submission client.
//!
//! Client-side (hydrate): multipart POST via `gloo-net`, raced against a
//! fixed deadline because the relay applies no timeout of its own. The
//! response classification is pure and unit tested natively.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses to one generic toast for the visitor; the
//! specific [`RelayError`] goes to the console log instead.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use serde::Deserialize;
use thiserror::Error;

#[cfg(feature = "hydrate")]
use crate::state::form::{ConsultationFields, subject_line};

/// Third-party endpoint that forwards submissions as email.
pub const FORM_ENDPOINT: &str = "https://formsubmit.co/ajax/usman232429@gmail.com";

/// Upper bound on the POST round trip.
pub const SUBMIT_TIMEOUT_MS: u64 = 15_000;

/// Failure modes of one submission attempt.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("endpoint returned HTTP {0}")]
    Status(u16),
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("no response from the relay endpoint")]
    TimedOut,
    #[error("browser API failure: {0}")]
    Browser(String),
}

/// Body returned by the relay. `success` arrives as a JSON string in
/// practice; booleans are tolerated.
#[derive(Debug, Default, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A submission counts as accepted only when the success flag stringifies,
/// case-insensitively, to `"true"`.
#[must_use]
pub fn response_accepted(response: &RelayResponse) -> bool {
    match &response.success {
        Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
        Some(serde_json::Value::Bool(flag)) => *flag,
        _ => false,
    }
}

/// POST the consultation request as multipart form data.
///
/// # Errors
///
/// Returns a [`RelayError`] on transport failure, a non-success status, a
/// body whose success flag is not `"true"`, or deadline expiry.
#[cfg(feature = "hydrate")]
pub async fn submit_consultation(
    fields: &ConsultationFields,
    page_url: &str,
    attachment: Option<&web_sys::File>,
) -> Result<(), RelayError> {
    use futures::future::{Either, select};

    let form = build_form_data(fields, page_url, attachment)?;
    let request = gloo_net::http::Request::post(FORM_ENDPOINT)
        .body(form)
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    let send = Box::pin(request.send());
    let deadline = Box::pin(gloo_timers::future::sleep(
        std::time::Duration::from_millis(SUBMIT_TIMEOUT_MS),
    ));
    let response = match select(send, deadline).await {
        Either::Left((sent, _)) => sent.map_err(|e| RelayError::Transport(e.to_string()))?,
        Either::Right(((), _)) => return Err(RelayError::TimedOut),
    };

    if !response.ok() {
        return Err(RelayError::Status(response.status()));
    }
    let body: RelayResponse = response
        .json()
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;
    if !response_accepted(&body) {
        return Err(RelayError::Rejected(
            body.message.unwrap_or_else(|| "success flag not set".to_owned()),
        ));
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn build_form_data(
    fields: &ConsultationFields,
    page_url: &str,
    attachment: Option<&web_sys::File>,
) -> Result<web_sys::FormData, RelayError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_str("name", &fields.name).map_err(js_error)?;
    form.append_with_str("email", &fields.email).map_err(js_error)?;
    form.append_with_str("phone", fields.phone_or_default())
        .map_err(js_error)?;
    form.append_with_str("summary", &fields.summary).map_err(js_error)?;
    form.append_with_str("_subject", &subject_line(&fields.name))
        .map_err(js_error)?;
    form.append_with_str("_captcha", "false").map_err(js_error)?;
    form.append_with_str("_url", page_url).map_err(js_error)?;
    if let Some(file) = attachment {
        form.append_with_blob_and_filename("attachment", file, &file.name())
            .map_err(js_error)?;
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> RelayError {
    RelayError::Browser(format!("{err:?}"))
}
