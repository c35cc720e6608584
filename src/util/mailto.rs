//! Pre-filled email draft for local-file sessions.
//!
//! When the page is opened straight from disk there is no origin to POST
//! from, so the form falls back to a draft in the visitor's mail client.
//! Attachments cannot ride along on a `mailto:` URL; the body carries a
//! notice asking the sender to attach the file manually.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::state::form::{ConsultationFields, subject_line};

/// Destination inbox for both the relay and the mailto fallback.
pub const CONTACT_EMAIL: &str = "usman232429@gmail.com";

pub const ATTACHMENT_NOTICE: &str =
    "Attachment selected in form. Please attach it manually before sending.";
pub const NO_ATTACHMENT_NOTICE: &str = "No attachment provided.";

/// Characters spared by `encodeURIComponent`; everything else is escaped.
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one query component, `encodeURIComponent` style.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT_SET).to_string()
}

/// Plain-text draft body mirroring the relay payload.
#[must_use]
pub fn draft_body(fields: &ConsultationFields, has_attachment: bool) -> String {
    let notice = if has_attachment { ATTACHMENT_NOTICE } else { NO_ATTACHMENT_NOTICE };
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\nSummary:\n{}\n\n{}",
        fields.name,
        fields.email,
        fields.phone_or_default(),
        fields.summary,
        notice,
    )
}

/// Full `mailto:` URL with encoded subject and body.
#[must_use]
pub fn draft_url(fields: &ConsultationFields, has_attachment: bool) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        CONTACT_EMAIL,
        encode_component(&subject_line(&fields.name)),
        encode_component(&draft_body(fields, has_attachment)),
    )
}
