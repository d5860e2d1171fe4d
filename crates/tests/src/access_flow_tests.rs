//! End-to-end flows across session, guard, and navigation: what a user
//! actually experiences when signing in and out of different roles.

use pretty_assertions::assert_eq;
use platform::{build_navigation, decide, RouteDecision};
use shared_types::Role;

use crate::common;

#[test]
fn tutor_login_swaps_the_menu_in_one_step() {
    let mut session = common::startup_session();
    assert!(session.login("tutor@skillora.com", "password", Role::Tutor));

    let labels: Vec<_> = build_navigation(session.role().unwrap())
        .iter()
        .map(|e| e.label)
        .collect();
    assert!(labels.contains(&"Create Course"));
    assert!(!labels.contains(&"Achievements"));
}

#[test]
fn failed_login_keeps_menu_and_access_unchanged() {
    let mut session = common::startup_session();
    let menu_before = build_navigation(session.role().unwrap());

    assert!(!session.login("student@skillora.com", "wrong", Role::Student));

    assert_eq!(build_navigation(session.role().unwrap()), menu_before);
    assert_eq!(
        decide(session.current_user(), "/courses"),
        RouteDecision::Render
    );
}

#[test]
fn admin_path_is_gated_on_identity_presence_only() {
    let mut session = common::anonymous_session();
    assert_eq!(
        decide(session.current_user(), "/admin"),
        RouteDecision::RedirectToLogin
    );

    assert!(session.login("admin@skillora.com", "password", Role::Admin));
    assert_eq!(
        decide(session.current_user(), "/admin"),
        RouteDecision::Render
    );
}

#[test]
fn logout_locks_every_protected_path_again() {
    let mut session = common::startup_session();
    session.logout();

    for entry in build_navigation(Role::Student) {
        assert_eq!(
            decide(session.current_user(), entry.path),
            RouteDecision::RedirectToLogin,
            "{}",
            entry.path
        );
    }
}

#[test]
fn identity_switch_changes_menu_without_credentials() {
    let mut session = common::startup_session();
    session.switch_identity("user-4").unwrap();

    let labels: Vec<_> = build_navigation(session.role().unwrap())
        .iter()
        .map(|e| e.label)
        .collect();
    assert!(labels.contains(&"Subscriptions"));
    assert!(!labels.contains(&"My Courses"));
}
