use super::*;

#[test]
fn valid_draft_parses_employee_id() {
    let draft = validate_draft("42", "clear writing", "estimates", Sentiment::Neutral).unwrap();
    assert_eq!(draft.employee_id, 42);
    assert_eq!(draft.sentiment, Sentiment::Neutral);
}

#[test]
fn draft_fields_are_required() {
    assert_eq!(
        validate_draft("", "s", "i", Sentiment::Positive),
        Err("All fields are required")
    );
    assert_eq!(
        validate_draft("42", "   ", "i", Sentiment::Positive),
        Err("All fields are required")
    );
    assert_eq!(
        validate_draft("42", "s", "", Sentiment::Positive),
        Err("All fields are required")
    );
}

#[test]
fn employee_id_must_be_numeric() {
    assert_eq!(
        validate_draft("EMP-42", "s", "i", Sentiment::Positive),
        Err("Employee ID must be a number")
    );
    assert_eq!(
        validate_draft("4.2", "s", "i", Sentiment::Positive),
        Err("Employee ID must be a number")
    );
}

#[test]
fn draft_text_is_trimmed() {
    let draft = validate_draft(" 7 ", "  ownership  ", " docs ", Sentiment::Positive).unwrap();
    assert_eq!(draft.employee_id, 7);
    assert_eq!(draft.strengths, "ownership");
    assert_eq!(draft.improvements, "docs");
}
