use super::*;

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
    assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"employee\"");
}

#[test]
fn role_parses_wire_form_and_rejects_unknown() {
    assert_eq!("manager".parse::<Role>(), Ok(Role::Manager));
    assert_eq!("employee".parse::<Role>(), Ok(Role::Employee));
    assert!("admin".parse::<Role>().is_err());
    assert!("Manager".parse::<Role>().is_err());
}

#[test]
fn role_dashboard_paths() {
    assert_eq!(Role::Manager.dashboard_path(), "/manager-dashboard");
    assert_eq!(Role::Employee.dashboard_path(), "/employee-dashboard");
}

#[test]
fn sentiment_round_trips_through_wire_form() {
    for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
        assert_eq!(sentiment.as_str().parse::<Sentiment>(), Ok(sentiment));
    }
    assert!("mixed".parse::<Sentiment>().is_err());
}

#[test]
fn feedback_acknowledged_defaults_false_when_backend_omits_it() {
    let raw = r#"{
        "id": 7,
        "employee_id": 2,
        "manager_id": 1,
        "strengths": "clear writing",
        "improvements": "estimates",
        "sentiment": "positive"
    }"#;
    let feedback: Feedback = serde_json::from_str(raw).unwrap();
    assert!(!feedback.acknowledged);
    assert_eq!(feedback.created_at, None);
}

#[test]
fn feedback_rejects_unknown_sentiment() {
    let raw = r#"{
        "id": 7,
        "employee_id": 2,
        "manager_id": 1,
        "strengths": "s",
        "improvements": "i",
        "sentiment": "enthusiastic"
    }"#;
    assert!(serde_json::from_str::<Feedback>(raw).is_err());
}

#[test]
fn token_response_parses_login_payload() {
    let raw = r#"{
        "access_token": "jwt-abc",
        "token_type": "bearer",
        "user": {"email": "a@dpdzero.com", "role": "employee", "name": "Asha"}
    }"#;
    let resp: TokenResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.access_token, "jwt-abc");
    assert_eq!(resp.user.role, Role::Employee);
    assert_eq!(resp.user.name, "Asha");
}

#[test]
fn feedback_create_serializes_expected_fields() {
    let draft = FeedbackCreate {
        employee_id: 9,
        strengths: "ownership".to_owned(),
        improvements: "docs".to_owned(),
        sentiment: Sentiment::Neutral,
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["employee_id"], 9);
    assert_eq!(value["sentiment"], "neutral");
}
