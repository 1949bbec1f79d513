use super::*;
use crate::net::types::User;

fn session(role: Option<Role>) -> AuthState {
    AuthState::loaded(role.map(|role| User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
    }))
}

#[test]
fn loading_renders_nothing_regardless_of_path() {
    let state = AuthState::pending();
    assert_eq!(decide(&state, "/grades", &ADMIN_POLICY), GuardDecision::Loading);
    assert_eq!(decide(&state, "/signin", &ADMIN_POLICY), GuardDecision::Loading);
}

#[test]
fn anonymous_on_private_path_goes_to_signin() {
    assert_eq!(decide(&session(None), "/blogs", &ADMIN_POLICY), GuardDecision::RedirectSignIn);
    assert_eq!(decide(&session(None), "/", &ADMIN_POLICY), GuardDecision::RedirectSignIn);
}

#[test]
fn anonymous_on_public_path_is_allowed() {
    assert_eq!(decide(&session(None), "/signin", &ADMIN_POLICY), GuardDecision::Allow);
    assert_eq!(decide(&session(None), "/forbidden", &ADMIN_POLICY), GuardDecision::Allow);
}

#[test]
fn user_without_role_goes_to_forbidden() {
    assert_eq!(decide(&session(Some(Role::Tutor)), "/grades", &ADMIN_POLICY), GuardDecision::RedirectForbidden);
    assert_eq!(decide(&session(Some(Role::User)), "/signin", &ADMIN_POLICY), GuardDecision::RedirectForbidden);
}

#[test]
fn user_without_role_may_stay_on_forbidden_page() {
    assert_eq!(decide(&session(Some(Role::User)), "/forbidden", &ADMIN_POLICY), GuardDecision::Allow);
}

#[test]
fn privileged_user_on_signin_goes_home() {
    assert_eq!(decide(&session(Some(Role::Admin)), "/signin", &ADMIN_POLICY), GuardDecision::RedirectHome);
    assert_eq!(decide(&session(Some(Role::Moderator)), "/signin/", &ADMIN_POLICY), GuardDecision::RedirectHome);
}

#[test]
fn privileged_user_on_private_path_is_allowed() {
    assert_eq!(decide(&session(Some(Role::Admin)), "/tutor-requests", &ADMIN_POLICY), GuardDecision::Allow);
    assert_eq!(decide(&session(Some(Role::Admin)), "/", &ADMIN_POLICY), GuardDecision::Allow);
}

#[test]
fn path_matching_requires_segment_boundary() {
    assert!(path_matches("/signin", "/signin"));
    assert!(path_matches("/signin/reset", "/signin"));
    assert!(!path_matches("/signing", "/signin"));
    assert!(path_matches("/", "/"));
    assert!(!path_matches("/grades", "/"));
}

#[test]
fn redirect_targets_follow_policy() {
    assert_eq!(ADMIN_POLICY.redirect_target(GuardDecision::RedirectSignIn), Some("/signin"));
    assert_eq!(ADMIN_POLICY.redirect_target(GuardDecision::RedirectForbidden), Some("/forbidden"));
    assert_eq!(ADMIN_POLICY.redirect_target(GuardDecision::RedirectHome), Some("/"));
    assert_eq!(ADMIN_POLICY.redirect_target(GuardDecision::Allow), None);
    assert_eq!(ADMIN_POLICY.redirect_target(GuardDecision::Loading), None);
}

#[test]
fn every_session_shape_yields_one_decision() {
    let sessions = [
        AuthState::pending(),
        session(None),
        session(Some(Role::User)),
        session(Some(Role::Tutor)),
        session(Some(Role::Moderator)),
        session(Some(Role::Admin)),
    ];
    for state in &sessions {
        for path in ["/", "/signin", "/forbidden", "/grades", "/blogs"] {
            let decision = decide(state, path, &ADMIN_POLICY);
            if let Some(target) = ADMIN_POLICY.redirect_target(decision) {
                // A redirect target must itself be stable for the same session.
                let next = decide(state, target, &ADMIN_POLICY);
                assert_eq!(next, GuardDecision::Allow, "session={state:?} path={path} target={target}");
            }
        }
    }
}
