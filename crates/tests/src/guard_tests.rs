use pretty_assertions::assert_eq;
use platform::{decide, RouteDecision};

use crate::common;

#[test]
fn anonymous_requests_to_protected_paths_redirect() {
    let session = common::anonymous_session();
    for path in [
        "/",
        "/courses",
        "/courses/course-2",
        "/schedule",
        "/messages",
        "/tutor/students",
        "/admin/analytics",
        "/profile",
        "/settings",
    ] {
        assert_eq!(
            decide(session.current_user(), path),
            RouteDecision::RedirectToLogin,
            "{path}"
        );
    }
}

#[test]
fn anonymous_requests_to_public_paths_render() {
    let session = common::anonymous_session();
    assert_eq!(
        decide(session.current_user(), "/login"),
        RouteDecision::Render
    );
    // Unknown paths are served by the not-found view without a session.
    assert_eq!(
        decide(session.current_user(), "/no-such-page"),
        RouteDecision::Render
    );
}

#[test]
fn the_decision_flips_with_session_state_not_with_history() {
    let mut session = common::anonymous_session();
    assert_eq!(
        decide(session.current_user(), "/courses"),
        RouteDecision::RedirectToLogin
    );

    session.switch_identity("user-1").unwrap();
    assert_eq!(
        decide(session.current_user(), "/courses"),
        RouteDecision::Render
    );

    session.logout();
    assert_eq!(
        decide(session.current_user(), "/courses"),
        RouteDecision::RedirectToLogin
    );
}

#[test]
fn repeated_decisions_with_identical_inputs_agree() {
    let authenticated = common::startup_session();
    let anonymous = common::anonymous_session();
    for path in ["/", "/login", "/courses", "/admin/users", "/no-such-page"] {
        let first = decide(authenticated.current_user(), path);
        assert_eq!(decide(authenticated.current_user(), path), first, "{path}");

        let first = decide(anonymous.current_user(), path);
        assert_eq!(decide(anonymous.current_user(), path), first, "{path}");
    }
}

#[test]
fn guard_ignores_which_role_is_signed_in() {
    let mut session = common::startup_session();
    for id in ["user-1", "user-2", "user-4"] {
        session.switch_identity(id).unwrap();
        for path in ["/admin", "/admin/users", "/tutor/analytics", "/courses"] {
            assert_eq!(
                decide(session.current_user(), path),
                RouteDecision::Render,
                "{id} on {path}"
            );
        }
    }
}
