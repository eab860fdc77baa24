use super::*;

fn valid_input() -> SignupInput<'static> {
    SignupInput {
        name: "Asha",
        email: "asha@dpdzero.com",
        password: "secret1",
        phone: "9876543210",
        department: "Engineering",
        role: Role::Employee,
    }
}

#[test]
fn valid_input_builds_a_request() {
    let request = validate_signup_input(&valid_input()).unwrap();
    assert_eq!(request.email, "asha@dpdzero.com");
    assert_eq!(request.role, Role::Employee);
    assert_eq!(request.phone, "9876543210");
}

#[test]
fn every_field_is_required() {
    for missing in ["name", "email", "password", "phone", "department"] {
        let mut input = valid_input();
        match missing {
            "name" => input.name = "  ",
            "email" => input.email = "",
            "password" => input.password = "",
            "phone" => input.phone = "",
            _ => input.department = "",
        }
        assert_eq!(
            validate_signup_input(&input),
            Err("All fields are required"),
            "missing {missing}"
        );
    }
}

#[test]
fn email_must_use_the_company_domain() {
    let mut input = valid_input();
    input.email = "asha@gmail.com";
    assert_eq!(
        validate_signup_input(&input),
        Err("Please use your @dpdzero.com email")
    );
}

#[test]
fn password_must_be_long_enough() {
    let mut input = valid_input();
    input.password = "tiny5";
    assert_eq!(
        validate_signup_input(&input),
        Err("Password must be at least 6 characters")
    );
}

#[test]
fn phone_must_be_ten_digits() {
    for phone in ["12345", "98765432101", "98765abc10", "9876 54321"] {
        let mut input = valid_input();
        input.phone = phone;
        assert_eq!(
            validate_signup_input(&input),
            Err("Phone must be 10 digits"),
            "phone = {phone:?}"
        );
    }
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let mut input = valid_input();
    input.name = "  Asha  ";
    input.phone = " 9876543210 ";
    let request = validate_signup_input(&input).unwrap();
    assert_eq!(request.name, "Asha");
    assert_eq!(request.phone, "9876543210");
}
