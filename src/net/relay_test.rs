use super::*;

fn response(body: &str) -> RelayResponse {
    serde_json::from_str(body).expect("test body should deserialize")
}

// =============================================================
// Success-flag classification
// =============================================================

#[test]
fn string_true_accepted_any_case() {
    assert!(response_accepted(&response(r#"{"success":"true"}"#)));
    assert!(response_accepted(&response(r#"{"success":"TRUE"}"#)));
    assert!(response_accepted(&response(r#"{"success":"True"}"#)));
}

#[test]
fn boolean_true_accepted() {
    assert!(response_accepted(&response(r#"{"success":true}"#)));
}

#[test]
fn false_flags_rejected() {
    assert!(!response_accepted(&response(r#"{"success":"false"}"#)));
    assert!(!response_accepted(&response(r#"{"success":false}"#)));
}

#[test]
fn missing_or_junk_flags_rejected() {
    assert!(!response_accepted(&response("{}")));
    assert!(!response_accepted(&response(r#"{"success":1}"#)));
    assert!(!response_accepted(&response(r#"{"success":null}"#)));
    assert!(!response_accepted(&response(r#"{"success":"yes"}"#)));
}

// =============================================================
// Body parsing
// =============================================================

#[test]
fn message_field_survives_parsing() {
    let parsed = response(r#"{"success":"false","message":"blocked"}"#);
    assert_eq!(parsed.message.as_deref(), Some("blocked"));
}

#[test]
fn unknown_fields_ignored() {
    let parsed = response(r#"{"success":"true","next":"/thanks"}"#);
    assert!(response_accepted(&parsed));
}

// =============================================================
// Error display
// =============================================================

#[test]
fn errors_describe_their_cause() {
    assert_eq!(
        RelayError::Status(502).to_string(),
        "endpoint returned HTTP 502"
    );
    assert_eq!(
        RelayError::Rejected("spam score".to_owned()).to_string(),
        "submission rejected: spam score"
    );
    assert_eq!(
        RelayError::TimedOut.to_string(),
        "no response from the relay endpoint"
    );
}
