//! Role-based access decisions for protected routes.
//!
//! DESIGN
//! ======
//! The decision is a pure function of (required role, current principal), so
//! a protected page re-rendering against an unchanged session can never
//! flicker between outcomes. Redirects are expressed as data; the
//! `ProtectedRoute` component owns the actual navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::Principal;

/// Outcome of an access check for a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Render the protected content.
    Allow,
    /// No principal: send the visitor to the login page.
    RedirectToLogin,
    /// Authenticated but the wrong role: send them to the unauthorized page.
    RedirectToUnauthorized,
}

impl Decision {
    /// Route to navigate to, or `None` when the view may render.
    pub const fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some("/"),
            Self::RedirectToUnauthorized => Some("/unauthorized"),
        }
    }
}

/// Decide whether a view guarded by `required` may render for `principal`.
///
/// `required == None` admits any authenticated principal.
pub fn authorize(required: Option<Role>, principal: Option<&Principal>) -> Decision {
    let Some(principal) = principal else {
        return Decision::RedirectToLogin;
    };
    match required {
        Some(role) if principal.role != role => Decision::RedirectToUnauthorized,
        _ => Decision::Allow,
    }
}
