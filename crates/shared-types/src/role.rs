use serde::{Deserialize, Serialize};

/// Platform role controlling which navigation set and dashboard a user sees.
///
/// The set is closed: every role maps to a non-empty navigation block, and
/// dispatch over roles is always an exhaustive `match` so a new role cannot
/// be added without the compiler pointing at every switch that must learn
/// about it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Tutor,
    Admin,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Student, Role::Tutor, Role::Admin];

impl Role {
    /// Lowercase key used in credentials and serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
            Role::Admin => "admin",
        }
    }

    /// Human-readable name for badges and dropdowns.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Tutor => "Tutor",
            Role::Admin => "Admin",
        }
    }

    /// Parse a role key. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "student" => Some(Role::Student),
            "tutor" => Some(Role::Tutor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_as_str_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("Tutor"), Some(Role::Tutor));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    }

    #[test]
    fn role_parse_rejects_unknown() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Tutor).unwrap(), "\"tutor\"");
    }

    #[test]
    fn all_roles_list_is_complete() {
        assert_eq!(ALL_ROLES.len(), 3);
    }
}
