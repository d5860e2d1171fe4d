use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A user record from the directory.
///
/// The role is immutable per record. The session layer replaces the whole
/// identity on login or identity switch, never a single field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Course ids this user is enrolled in (students).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enrolled_courses: Vec<String>,
    /// Course ids this user teaches (tutors).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taught_courses: Vec<String>,
}

impl User {
    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: "user-1".into(),
            name: name.into(),
            email: "alex@example.com".into(),
            role: Role::Student,
            avatar: String::new(),
            bio: None,
            enrolled_courses: vec![],
            taught_courses: vec![],
        }
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(user("Alex Johnson").initials(), "AJ");
        assert_eq!(user("Dr. Michael Chen").initials(), "DM");
    }

    #[test]
    fn initials_single_word() {
        assert_eq!(user("admin").initials(), "A");
    }
}
