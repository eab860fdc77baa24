//! Route wrapper gating a view by role.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access decision itself is the pure function in `util::guard`; this
//! component binds it to the session signal and turns redirect decisions
//! into navigation. Children render only on an allow decision, so a
//! protected page body never mounts for the wrong audience.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::guard::{Decision, authorize};

/// Renders `children` when the session passes the role check; otherwise
/// navigates to the login or unauthorized page.
#[component]
pub fn ProtectedRoute(
    /// Required role; omit to admit any authenticated principal.
    #[prop(into, optional)]
    role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| authorize(role, session.principal().as_ref()));

    Effect::new(move || {
        if let Some(target) = decision.get().redirect_target() {
            navigate(target, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == Decision::Allow
            fallback=|| view! { <p class="route-guard__redirecting">"Redirecting..."</p> }
        >
            {children()}
        </Show>
    }
}
