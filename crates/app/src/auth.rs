use std::sync::Arc;

use dioxus::prelude::*;
use platform::{Directory, Session};
use shared_types::{Role, SessionError, User};

/// Global authentication state: the platform session behind a signal.
///
/// The session's three mutation methods are the only writers; components
/// never poke at identity fields directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    session: Signal<Session>,
}

impl AuthState {
    /// Session preloaded with the default identity (the demo student).
    pub fn new(directory: Arc<Directory>) -> Self {
        Self {
            session: Signal::new(Session::with_default_identity(directory)),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.read().current_user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().role()
    }

    pub fn directory(&self) -> Arc<Directory> {
        self.session.read().directory().clone()
    }

    pub fn login(&mut self, email: &str, password: &str, role: Role) -> bool {
        self.session.write().login(email, password, role)
    }

    pub fn logout(&mut self) {
        self.session.write().logout();
    }

    pub fn switch_identity(&mut self, id: &str) -> Result<(), SessionError> {
        self.session.write().switch_identity(id)
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the read-only directory.
pub fn use_directory() -> Arc<Directory> {
    use_context::<Arc<Directory>>()
}

/// The current identity's role, if authenticated.
pub fn use_role() -> Option<Role> {
    use_auth().role()
}
