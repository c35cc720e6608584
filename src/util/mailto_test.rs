use super::*;

fn fields() -> ConsultationFields {
    ConsultationFields {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: String::new(),
        summary: "Two services & a rewrite.".to_owned(),
    }
}

// =============================================================
// Component encoding
// =============================================================

#[test]
fn encode_escapes_reserved_characters() {
    assert_eq!(encode_component("a b"), "a%20b");
    assert_eq!(encode_component("ada@example.com"), "ada%40example.com");
    assert_eq!(encode_component("50%"), "50%25");
    assert_eq!(encode_component("a\nb"), "a%0Ab");
    assert_eq!(encode_component("tools & dies"), "tools%20%26%20dies");
}

#[test]
fn encode_spares_unreserved_characters() {
    let spared = "AZaz09-_.!~*'()";
    assert_eq!(encode_component(spared), spared);
}

// =============================================================
// Draft body
// =============================================================

#[test]
fn body_defaults_missing_phone() {
    let body = draft_body(&fields(), false);
    assert!(body.starts_with("Name: Ada Lovelace\nEmail: ada@example.com\nPhone: N/A\n"));
    assert!(body.contains("\nSummary:\nTwo services & a rewrite."));
}

#[test]
fn body_notes_pending_attachment() {
    assert!(draft_body(&fields(), true).ends_with(ATTACHMENT_NOTICE));
    assert!(draft_body(&fields(), false).ends_with(NO_ATTACHMENT_NOTICE));
}

#[test]
fn body_keeps_provided_phone() {
    let mut with_phone = fields();
    with_phone.phone = "555-0100".to_owned();
    assert!(draft_body(&with_phone, false).contains("Phone: 555-0100\n"));
}

// =============================================================
// Draft URL
// =============================================================

#[test]
fn url_targets_contact_inbox_with_encoded_subject() {
    let url = draft_url(&fields(), false);
    assert!(url.starts_with(
        "mailto:usman232429@gmail.com?subject=Free%20Consultation%20Request%20from%20Ada%20Lovelace&body="
    ));
    assert!(url.contains("Name%3A%20Ada%20Lovelace"));
    assert!(!url.contains(' '), "raw spaces must never survive encoding");
}
