//! Session state: who is logged in, for the lifetime of the browser session.
//!
//! DESIGN
//! ======
//! `Session` is a plain two-state value (unauthenticated, or authenticated
//! with a principal) so the lifecycle rules stay unit-testable off the
//! browser. `SessionStore` wraps it in a context-provided signal and writes
//! through to localStorage so a page reload does not log the user out.
//!
//! ERROR HANDLING
//! ==============
//! Rehydration fails closed: a stored record that cannot be parsed is
//! treated as "not logged in", never as an error the UI has to handle.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::{Role, TokenResponse};
use crate::util::storage;

const STORAGE_KEY: &str = "feedback_session";

/// The authenticated identity held for the current browser session.
///
/// The backend issues no numeric id at login, so the email doubles as the
/// stable identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Bearer token attached to every authenticated request.
    pub token: String,
}

impl From<TokenResponse> for Principal {
    fn from(resp: TokenResponse) -> Self {
        Self {
            name: resp.user.name,
            email: resp.user.email,
            role: resp.user.role,
            token: resp.access_token,
        }
    }
}

/// Two-state session value: unauthenticated, or authenticated with a
/// principal. `login` while already authenticated replaces the principal
/// (account switch).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    principal: Option<Principal>,
}

impl Session {
    /// The unauthenticated state.
    pub const fn unauthenticated() -> Self {
        Self { principal: None }
    }

    /// Rehydrate from a raw stored record. Anything unreadable yields the
    /// unauthenticated state.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::unauthenticated();
        };
        match serde_json::from_str::<Principal>(raw) {
            Ok(principal) => Self { principal: Some(principal) },
            Err(err) => {
                log::warn!("stored session unreadable, treating as logged out: {err}");
                Self::unauthenticated()
            }
        }
    }

    /// Serialized form of the current principal, or `None` when logged out.
    pub fn to_stored(&self) -> Option<String> {
        let principal = self.principal.as_ref()?;
        serde_json::to_string(principal).ok()
    }

    pub fn login(&mut self, principal: Principal) {
        self.principal = Some(principal);
    }

    pub fn logout(&mut self) {
        self.principal = None;
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }
}

/// Context-provided handle to the session, shared by every page and the
/// navigation shell. Only `login`/`logout` mutate it; readers observe the
/// new value on the next render.
#[derive(Clone, Copy)]
pub struct SessionStore {
    inner: RwSignal<Session>,
}

impl SessionStore {
    /// Build the store for app start, rehydrating any persisted session.
    pub fn restore() -> Self {
        let stored = storage::read(STORAGE_KEY);
        Self {
            inner: RwSignal::new(Session::from_stored(stored.as_deref())),
        }
    }

    /// Record `principal` as the current user and persist it.
    pub fn login(self, principal: Principal) {
        self.inner.update(|session| session.login(principal));
        if let Some(raw) = self.inner.with_untracked(Session::to_stored) {
            storage::write(STORAGE_KEY, &raw);
        }
    }

    /// Clear the current user and the persisted copy.
    pub fn logout(self) {
        self.inner.update(Session::logout);
        storage::remove(STORAGE_KEY);
    }

    /// The current principal, tracked reactively.
    pub fn principal(self) -> Option<Principal> {
        self.inner.with(|session| session.principal().cloned())
    }

    /// The current principal without registering a reactive dependency.
    pub fn principal_untracked(self) -> Option<Principal> {
        self.inner.with_untracked(|session| session.principal().cloned())
    }
}
