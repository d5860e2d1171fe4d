use pretty_assertions::assert_eq;
use platform::DEMO_CREDENTIALS;
use shared_types::{Role, SessionError};

use crate::common;

#[test]
fn startup_session_is_authenticated_as_the_demo_student() {
    let session = common::startup_session();
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Student));
}

#[test]
fn login_then_logout_round_trip() {
    let mut session = common::anonymous_session();
    assert!(session.login("admin@skillora.com", "password", Role::Admin));
    assert_eq!(session.role(), Some(Role::Admin));

    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.current_user(), None);
}

#[test]
fn credentials_are_checked_as_a_whole_triple() {
    let mut session = common::anonymous_session();

    // Each field individually correct but combined across triples: rejected.
    assert!(!session.login("student@skillora.com", "password", Role::Tutor));
    assert!(!session.login("tutor@skillora.com", "password", Role::Admin));
    assert!(!session.login("admin@skillora.com", "PASSWORD", Role::Admin));
    assert!(!session.is_authenticated());
}

#[test]
fn failed_login_preserves_the_previous_identity() {
    let mut session = common::startup_session();
    session.switch_identity("user-4").unwrap();

    assert!(!session.login("student@skillora.com", "wrong", Role::Student));
    assert_eq!(session.current_user().map(|u| u.id.as_str()), Some("user-4"));
    assert_eq!(session.role(), Some(Role::Admin));
}

#[test]
fn login_selects_the_first_directory_user_with_the_role() {
    // Two tutors exist in the directory; login lands on the first one.
    let mut session = common::anonymous_session();
    assert!(session.login("tutor@skillora.com", "password", Role::Tutor));
    assert_eq!(session.current_user().map(|u| u.id.as_str()), Some("user-2"));
}

#[test]
fn switch_identity_can_reach_every_directory_user() {
    let dir = common::directory();
    let mut session = common::startup_session();
    for user in dir.users() {
        session.switch_identity(&user.id).unwrap();
        let current = session.current_user().expect("authenticated");
        assert_eq!(current.id, user.id);
        assert_eq!(current.role, user.role);
    }
}

#[test]
fn switch_identity_rejects_unknown_ids() {
    let mut session = common::startup_session();
    let err = session.switch_identity("nobody").unwrap_err();
    assert_eq!(err, SessionError::UnknownUser { id: "nobody".into() });
    assert_eq!(session.role(), Some(Role::Student));
}

#[test]
fn switch_identity_works_from_the_logged_out_state() {
    // The switcher is a demo tool, not a credential path, so it does not
    // require an existing identity.
    let mut session = common::anonymous_session();
    session.switch_identity("user-3").unwrap();
    assert_eq!(session.role(), Some(Role::Tutor));
}

#[test]
fn allow_list_covers_exactly_the_three_roles() {
    let mut roles: Vec<Role> = DEMO_CREDENTIALS.iter().map(|(_, _, r)| *r).collect();
    roles.sort_by_key(|r| r.as_str());
    roles.dedup();
    assert_eq!(roles.len(), 3);
}
