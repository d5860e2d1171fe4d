use std::sync::Arc;

use platform::{Directory, Session};

/// A freshly seeded read-only directory.
pub fn directory() -> Arc<Directory> {
    Arc::new(Directory::seed())
}

/// A session in the app's startup state: authenticated as the demo student.
pub fn startup_session() -> Session {
    Session::with_default_identity(directory())
}

/// A session with no identity at all.
pub fn anonymous_session() -> Session {
    Session::new(directory())
}
