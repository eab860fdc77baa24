//! Login page: email + password + role select.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::input_field::InputField;
use crate::components::notice_stack::notify;
use crate::net::api;
use crate::net::types::{LoginRequest, Role};
use crate::state::notices::{NoticeKind, NoticeState};
use crate::state::session::{Principal, SessionStore};

fn validate_login_input(email: &str, password: &str, role: Role) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        role,
    })
}

/// Unauthenticated entry point. On success the principal is stored and the
/// user lands on the dashboard for the role the server confirmed.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Manager);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get(), role.get()) {
            Ok(request) => request,
            Err(message) => {
                notify(notices, NoticeKind::Error, message);
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&request).await {
                Ok(resp) => {
                    let principal = Principal::from(resp);
                    let target = principal.role.dashboard_path();
                    session.login(principal);
                    notify(notices, NoticeKind::Success, "Login successful");
                    navigate(target, NavigateOptions::default());
                }
                Err(message) => notify(notices, NoticeKind::Error, message),
            }
            // The page may already be unmounted after navigation.
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2 class="auth-card__title">"Login to Your Account"</h2>

                <InputField
                    label="Email"
                    name="email"
                    input_type="email"
                    placeholder="Enter your email"
                    value=email
                />
                <InputField
                    label="Password"
                    name="password"
                    input_type="password"
                    placeholder="Enter your password"
                    value=password
                />

                <label class="field" for="role">
                    <span class="field__label">"Select Role"</span>
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
                        <option value="manager" selected=move || role.get() == Role::Manager>
                            "Manager"
                        </option>
                        <option value="employee" selected=move || role.get() == Role::Employee>
                            "Employee"
                        </option>
                    </select>
                </label>

                <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>

                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a class="auth-card__switch" href="/signup">"Sign up"</a>
                </p>
            </form>
        </div>
    }
}
