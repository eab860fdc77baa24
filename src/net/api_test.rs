use super::*;

#[test]
fn endpoint_prefixes_configured_base() {
    // Default build has no API_BASE_URL override, so paths stay relative.
    assert_eq!(endpoint("/api/auth/login"), format!("{API_BASE}/api/auth/login"));
    assert!(endpoint("/api/feedback/").ends_with("/api/feedback/"));
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("jwt-abc"), "Bearer jwt-abc");
}

#[test]
fn failure_message_prefers_backend_detail() {
    assert_eq!(
        failure_message("login", 401, Some("Invalid email or password".to_owned())),
        "Invalid email or password"
    );
}

#[test]
fn failure_message_falls_back_to_operation_and_status() {
    assert_eq!(failure_message("login", 500, None), "login failed: 500");
    assert_eq!(failure_message("acknowledge", 404, None), "acknowledge failed: 404");
}

#[test]
fn error_body_tolerates_missing_detail() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.detail.is_none());
    let body: ErrorBody = serde_json::from_str(r#"{"detail": "nope"}"#).unwrap();
    assert_eq!(body.detail.as_deref(), Some("nope"));
}
