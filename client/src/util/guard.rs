//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies the same redirect rules. The decision is a pure
//! function of the session and the current path; `RouteGuard` performs the
//! resulting navigation, which is idempotent.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Outcome of evaluating the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not loaded yet; render nothing.
    Loading,
    RedirectSignIn,
    RedirectForbidden,
    RedirectHome,
    Allow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Reachable without a session.
    pub public_paths: &'static [&'static str],
    /// Privileged users are bounced home from these.
    pub public_only_paths: &'static [&'static str],
    pub required_roles: &'static [Role],
    pub sign_in_path: &'static str,
    pub forbidden_path: &'static str,
    pub home_path: &'static str,
}

/// The dashboard's policy: staff only, with a public sign-in page.
pub const ADMIN_POLICY: GuardPolicy = GuardPolicy {
    public_paths: &["/signin", "/forbidden"],
    public_only_paths: &["/signin"],
    required_roles: &[Role::Admin, Role::Moderator],
    sign_in_path: "/signin",
    forbidden_path: "/forbidden",
    home_path: "/",
};

impl GuardPolicy {
    #[must_use]
    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| path_matches(path, p))
    }

    #[must_use]
    pub fn is_public_only(&self, path: &str) -> bool {
        self.public_only_paths.iter().any(|p| path_matches(path, p))
    }

    /// Where a decision sends the browser, if anywhere.
    #[must_use]
    pub fn redirect_target(&self, decision: GuardDecision) -> Option<&'static str> {
        match decision {
            GuardDecision::RedirectSignIn => Some(self.sign_in_path),
            GuardDecision::RedirectForbidden => Some(self.forbidden_path),
            GuardDecision::RedirectHome => Some(self.home_path),
            GuardDecision::Loading | GuardDecision::Allow => None,
        }
    }
}

/// `path` equals `pattern` or is nested below it.
fn path_matches(path: &str, pattern: &str) -> bool {
    let path = path.trim_end_matches('/');
    let pattern = pattern.trim_end_matches('/');
    if pattern.is_empty() {
        return path.is_empty();
    }
    path == pattern || path.strip_prefix(pattern).is_some_and(|rest| rest.starts_with('/'))
}

/// Evaluate the guard for `path` under `policy`.
#[must_use]
pub fn decide(auth: &AuthState, path: &str, policy: &GuardPolicy) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Loading;
    }
    let Some(user) = auth.user.as_ref() else {
        return if policy.is_public(path) { GuardDecision::Allow } else { GuardDecision::RedirectSignIn };
    };
    if !policy.required_roles.contains(&user.role) {
        return if path_matches(path, policy.forbidden_path) {
            GuardDecision::Allow
        } else {
            GuardDecision::RedirectForbidden
        };
    }
    if policy.is_public_only(path) {
        return GuardDecision::RedirectHome;
    }
    GuardDecision::Allow
}
