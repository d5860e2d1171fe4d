use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors surfaced by session mutations.
///
/// Login failure is a returned `bool` rather than an error, since bad
/// credentials are an expected interaction rather than a fault. Identity
/// switches to an id outside the directory do surface here, so callers can
/// decide whether to show a "not found" state instead of swallowing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionError {
    /// The requested identity id does not exist in the directory.
    UnknownUser { id: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UnknownUser { id } => write!(f, "unknown user id: {id}"),
        }
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_display_includes_id() {
        let err = SessionError::UnknownUser {
            id: "user-99".into(),
        };
        assert_eq!(err.to_string(), "unknown user id: user-99");
    }
}
