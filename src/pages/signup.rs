//! Signup page with the company-account checks from the registration flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signup response carries only a confirmation message, no principal or
//! token, so a successful registration routes back to the login page rather
//! than pretending to be logged in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::input_field::InputField;
use crate::components::notice_stack::notify;
use crate::net::api;
use crate::net::types::{Role, SignupRequest};
use crate::state::notices::{NoticeKind, NoticeState};

const COMPANY_EMAIL_DOMAIN: &str = "@dpdzero.com";
const MIN_PASSWORD_LEN: usize = 6;
const PHONE_DIGITS: usize = 10;

struct SignupInput<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    phone: &'a str,
    department: &'a str,
    role: Role,
}

fn validate_signup_input(input: &SignupInput<'_>) -> Result<SignupRequest, &'static str> {
    let name = input.name.trim();
    let email = input.email.trim();
    let phone = input.phone.trim();
    let department = input.department.trim();

    if name.is_empty()
        || email.is_empty()
        || input.password.is_empty()
        || phone.is_empty()
        || department.is_empty()
    {
        return Err("All fields are required");
    }
    if !email.ends_with(COMPANY_EMAIL_DOMAIN) {
        return Err("Please use your @dpdzero.com email");
    }
    if input.password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    if phone.len() != PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone must be 10 digits");
    }

    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: input.password.to_owned(),
        phone: phone.to_owned(),
        department: department.to_owned(),
        role: input.role,
    })
}

/// Account registration form.
#[component]
pub fn SignupPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Employee);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();
        let phone_value = phone.get();
        let department_value = department.get();
        let input = SignupInput {
            name: &name_value,
            email: &email_value,
            password: &password_value,
            phone: &phone_value,
            department: &department_value,
            role: role.get(),
        };
        let request = match validate_signup_input(&input) {
            Ok(request) => request,
            Err(message) => {
                notify(notices, NoticeKind::Error, message);
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::signup(&request).await {
                Ok(()) => {
                    notify(notices, NoticeKind::Success, "Account created successfully!");
                    navigate("/", NavigateOptions::default());
                }
                Err(message) => notify(notices, NoticeKind::Error, message),
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2 class="auth-card__title">"Create Your Account"</h2>

                <InputField
                    label="Full Name"
                    name="name"
                    placeholder="Enter your full name"
                    value=name
                />
                <InputField
                    label="Email (use @dpdzero.com)"
                    name="email"
                    input_type="email"
                    placeholder="name@dpdzero.com"
                    value=email
                />
                <InputField
                    label="Password"
                    name="password"
                    input_type="password"
                    placeholder="Create a strong password"
                    value=password
                />
                <InputField
                    label="Phone Number"
                    name="phone"
                    input_type="tel"
                    placeholder="Enter 10-digit phone number"
                    value=phone
                />
                <InputField
                    label="Department"
                    name="department"
                    placeholder="Enter your department"
                    value=department
                />

                <label class="field" for="role">
                    <span class="field__label">"Role"</span>
                    <select
                        class="field__input"
                        id="role"
                        name="role"
                        on:change=move |ev| {
                            if let Ok(parsed) = event_target_value(&ev).parse::<Role>() {
                                role.set(parsed);
                            }
                        }
                    >
                        <option value="employee" selected=move || role.get() == Role::Employee>
                            "Employee"
                        </option>
                        <option value="manager" selected=move || role.get() == Role::Manager>
                            "Manager"
                        </option>
                    </select>
                </label>

                <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing up..." } else { "Signup" }}
                </button>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <a class="auth-card__switch" href="/">"Login here"</a>
                </p>
            </form>
        </div>
    }
}
