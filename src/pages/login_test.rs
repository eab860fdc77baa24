use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_role() {
    let request = validate_login_input("  asha@dpdzero.com  ", "secret", Role::Employee).unwrap();
    assert_eq!(request.email, "asha@dpdzero.com");
    assert_eq!(request.password, "secret");
    assert_eq!(request.role, Role::Employee);
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "secret", Role::Manager),
        Err("Please fill in all fields")
    );
    assert_eq!(
        validate_login_input("a@dpdzero.com", "", Role::Manager),
        Err("Please fill in all fields")
    );
    assert_eq!(
        validate_login_input("   ", "secret", Role::Manager),
        Err("Please fill in all fields")
    );
}
