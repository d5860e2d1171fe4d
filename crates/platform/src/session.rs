use std::sync::Arc;

use shared_types::{Role, SessionError, User};
use tracing::{debug, info, warn};

use crate::directory::Directory;

/// The fixed demo credential allow-list: the only (email, password, role)
/// triples `login` accepts. There is no identity provider behind this.
pub const DEMO_CREDENTIALS: &[(&str, &str, Role)] = &[
    ("student@skillora.com", "password", Role::Student),
    ("tutor@skillora.com", "password", Role::Tutor),
    ("admin@skillora.com", "password", Role::Admin),
];

/// Holds the current identity for the lifetime of an application session.
///
/// There is exactly zero or one current identity at any instant, and the
/// three methods below are the only writers. The session owns a handle to
/// the directory so identities are always whole directory records; the
/// role of an identity is never mutated in place.
///
/// Not an ambient global: the UI layer constructs one and injects it
/// through context.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    directory: Arc<Directory>,
    current: Option<User>,
}

impl Session {
    /// A session with no current identity (the Unauthenticated state).
    pub fn new(directory: Arc<Directory>) -> Self {
        Self {
            directory,
            current: None,
        }
    }

    /// A session preloaded with the directory's default identity, matching
    /// the app's startup behavior: the initial state is Authenticated as
    /// the demo student.
    pub fn with_default_identity(directory: Arc<Directory>) -> Self {
        let current = Some(directory.default_user().clone());
        Self { directory, current }
    }

    pub fn directory(&self) -> &Arc<Directory> {
        &self.directory
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|u| u.role)
    }

    /// Validate against the demo allow-list. On a match the current
    /// identity becomes the first directory user with the requested role
    /// and `true` is returned. On any mismatch the session is left exactly
    /// as it was and `false` is returned. Bad credentials are an expected
    /// interaction, not an error.
    pub fn login(&mut self, email: &str, password: &str, role: Role) -> bool {
        let valid = DEMO_CREDENTIALS
            .iter()
            .any(|(e, p, r)| *e == email && *p == password && *r == role);

        if !valid {
            info!(email, role = %role, "login rejected");
            return false;
        }

        match self.directory.first_with_role(role) {
            Some(user) => {
                info!(user_id = %user.id, role = %role, "login succeeded");
                self.current = Some(user.clone());
                true
            }
            // Unreachable with the seeded directory (every role has a user),
            // but a missing record must not half-apply the login.
            None => {
                warn!(role = %role, "no directory user for authenticated role");
                false
            }
        }
    }

    /// Clear the current identity. Always succeeds.
    pub fn logout(&mut self) {
        info!("logout");
        self.current = None;
    }

    /// Replace the current identity wholesale with the directory record for
    /// `id`. An unknown id leaves the session unchanged and reports
    /// `SessionError::UnknownUser` instead of silently ignoring it.
    pub fn switch_identity(&mut self, id: &str) -> Result<(), SessionError> {
        match self.directory.user(id) {
            Some(user) => {
                debug!(user_id = %user.id, role = %user.role, "identity switched");
                self.current = Some(user.clone());
                Ok(())
            }
            None => {
                warn!(user_id = %id, "identity switch to unknown id");
                Err(SessionError::UnknownUser { id: id.to_string() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::with_default_identity(Arc::new(Directory::seed()))
    }

    #[test]
    fn default_identity_is_the_student() {
        let session = session();
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Student));
        assert_eq!(session.current_user().map(|u| u.id.as_str()), Some("user-1"));
    }

    #[test]
    fn new_session_has_no_identity() {
        let session = Session::new(Arc::new(Directory::seed()));
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn login_accepts_each_allow_list_triple() {
        for (email, password, role) in DEMO_CREDENTIALS {
            let mut session = Session::new(Arc::new(Directory::seed()));
            assert!(session.login(email, password, *role), "triple for {role}");
            assert_eq!(session.role(), Some(*role));
        }
    }

    #[test]
    fn login_replaces_identity_with_matching_role_record() {
        let mut session = session();
        assert!(session.login("tutor@skillora.com", "password", Role::Tutor));
        let user = session.current_user().expect("authenticated");
        assert_eq!(user.id, "user-2");
        assert_eq!(user.role, Role::Tutor);
    }

    #[test]
    fn login_rejects_wrong_password_without_state_change() {
        let mut session = session();
        let before = session.current_user().cloned();
        assert!(!session.login("admin@skillora.com", "wrong", Role::Admin));
        assert_eq!(session.current_user().cloned(), before);
    }

    #[test]
    fn login_rejects_unknown_email_without_state_change() {
        let mut session = session();
        let before = session.current_user().cloned();
        assert!(!session.login("bad@x.com", "wrong", Role::Admin));
        assert_eq!(session.current_user().cloned(), before);
    }

    #[test]
    fn login_requires_role_to_match_the_triple() {
        // Valid email + password, wrong role: the triple must match exactly.
        let mut session = session();
        assert!(!session.login("student@skillora.com", "password", Role::Admin));
        assert_eq!(session.role(), Some(Role::Student));
    }

    #[test]
    fn logout_clears_identity_unconditionally() {
        let mut session = session();
        session.logout();
        assert!(!session.is_authenticated());
        // Idempotent.
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn switch_identity_replaces_wholesale_including_role() {
        let mut session = session();
        session.switch_identity("user-4").expect("known id");
        let user = session.current_user().expect("authenticated");
        assert_eq!(user.id, "user-4");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn switch_identity_unknown_id_reports_and_leaves_state() {
        let mut session = session();
        let before = session.current_user().cloned();
        let err = session.switch_identity("user-99").unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownUser {
                id: "user-99".into()
            }
        );
        assert_eq!(session.current_user().cloned(), before);
    }

    #[test]
    fn only_login_transitions_out_of_unauthenticated() {
        let mut session = Session::new(Arc::new(Directory::seed()));
        // A failed login does not transition.
        assert!(!session.login("student@skillora.com", "nope", Role::Student));
        assert!(!session.is_authenticated());
        // A successful one does.
        assert!(session.login("student@skillora.com", "password", Role::Student));
        assert!(session.is_authenticated());
    }
}
