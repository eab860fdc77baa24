use super::*;
use crate::net::types::Role;
use crate::state::session::Principal;

fn principal(role: Role) -> Principal {
    Principal {
        name: "Asha".to_owned(),
        email: "asha@dpdzero.com".to_owned(),
        role,
        token: "jwt-abc".to_owned(),
    }
}

#[test]
fn matching_role_is_allowed() {
    let manager = principal(Role::Manager);
    let employee = principal(Role::Employee);
    assert_eq!(authorize(Some(Role::Manager), Some(&manager)), Decision::Allow);
    assert_eq!(authorize(Some(Role::Employee), Some(&employee)), Decision::Allow);
}

#[test]
fn mismatched_role_redirects_to_unauthorized() {
    let manager = principal(Role::Manager);
    let employee = principal(Role::Employee);
    assert_eq!(
        authorize(Some(Role::Employee), Some(&manager)),
        Decision::RedirectToUnauthorized
    );
    assert_eq!(
        authorize(Some(Role::Manager), Some(&employee)),
        Decision::RedirectToUnauthorized
    );
}

#[test]
fn missing_principal_always_redirects_to_login() {
    assert_eq!(authorize(Some(Role::Manager), None), Decision::RedirectToLogin);
    assert_eq!(authorize(Some(Role::Employee), None), Decision::RedirectToLogin);
    assert_eq!(authorize(None, None), Decision::RedirectToLogin);
}

#[test]
fn no_required_role_admits_any_authenticated_principal() {
    let manager = principal(Role::Manager);
    let employee = principal(Role::Employee);
    assert_eq!(authorize(None, Some(&manager)), Decision::Allow);
    assert_eq!(authorize(None, Some(&employee)), Decision::Allow);
}

#[test]
fn decision_is_stable_for_unchanged_inputs() {
    let manager = principal(Role::Manager);
    let first = authorize(Some(Role::Employee), Some(&manager));
    for _ in 0..10 {
        assert_eq!(authorize(Some(Role::Employee), Some(&manager)), first);
    }
}

#[test]
fn redirect_targets_map_to_routes() {
    assert_eq!(Decision::Allow.redirect_target(), None);
    assert_eq!(Decision::RedirectToLogin.redirect_target(), Some("/"));
    assert_eq!(Decision::RedirectToUnauthorized.redirect_target(), Some("/unauthorized"));
}
