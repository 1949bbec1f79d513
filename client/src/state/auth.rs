//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and the layout header to coordinate redirects and
//! identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
///
/// Provided as an `RwSignal<AuthState>` context by `App`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session lookup has finished.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// A finished lookup, with or without a user.
    #[must_use]
    pub fn loaded(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    /// Whether the signed-in user holds any of `roles`.
    #[must_use]
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.user.as_ref().is_some_and(|u| roles.contains(&u.role))
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "-".to_owned(), |u| u.name.clone())
    }
}
