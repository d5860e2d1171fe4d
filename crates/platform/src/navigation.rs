use shared_types::Role;

/// Fixed unread-message count shown on the Messages entry. There is no
/// messaging backend; the badge is part of the demo dataset.
pub const UNREAD_MESSAGE_COUNT: u32 = 3;

/// Icon reference for a navigation entry. The UI layer maps these onto its
/// icon set; the builder itself stays framework-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    BookOpen,
    Calendar,
    FileText,
    PlayCircle,
    Trophy,
    MessageSquare,
    Upload,
    Users,
    BarChart,
    GraduationCap,
    UserCheck,
    Shield,
    Settings,
}

/// Dynamic decoration on a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBadge {
    /// Numeric count badge (unread messages).
    Count(u32),
    /// Presence dot with no number (pending assignments).
    Dot,
}

/// One entry in the role-specific side menu. Whether an entry is "active"
/// is derived from the current path via [`is_active`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub badge: Option<NavBadge>,
}

const fn entry(label: &'static str, path: &'static str, icon: NavIcon) -> NavEntry {
    NavEntry {
        label,
        path,
        icon,
        badge: None,
    }
}

const MESSAGES_BADGE: Option<NavBadge> = Some(NavBadge::Count(UNREAD_MESSAGE_COUNT));

/// Build the ordered menu for a role: the common Dashboard entry first, the
/// role-specific block, and the common Settings entry last.
///
/// The match is exhaustive over the closed role set, so every role is
/// guaranteed a non-empty menu at compile time rather than by a runtime
/// fallback branch.
pub fn build_navigation(role: Role) -> Vec<NavEntry> {
    let mut entries = vec![entry("Dashboard", "/", NavIcon::Home)];

    match role {
        Role::Student => entries.extend([
            entry("My Courses", "/courses", NavIcon::BookOpen),
            entry("Schedule", "/schedule", NavIcon::Calendar),
            NavEntry {
                label: "Assignments",
                path: "/assignments",
                icon: NavIcon::FileText,
                badge: Some(NavBadge::Dot),
            },
            entry("Live Classes", "/live-classes", NavIcon::PlayCircle),
            entry("Achievements", "/achievements", NavIcon::Trophy),
            NavEntry {
                label: "Messages",
                path: "/messages",
                icon: NavIcon::MessageSquare,
                badge: MESSAGES_BADGE,
            },
        ]),
        Role::Tutor => entries.extend([
            entry("My Courses", "/tutor/courses", NavIcon::BookOpen),
            entry("Create Course", "/tutor/create-course", NavIcon::Upload),
            entry("Students", "/tutor/students", NavIcon::Users),
            entry("Live Classes", "/tutor/live-classes", NavIcon::PlayCircle),
            entry("Assignments", "/tutor/assignments", NavIcon::FileText),
            entry("Analytics", "/tutor/analytics", NavIcon::BarChart),
            NavEntry {
                label: "Messages",
                path: "/messages",
                icon: NavIcon::MessageSquare,
                badge: MESSAGES_BADGE,
            },
        ]),
        Role::Admin => entries.extend([
            entry("Users", "/admin/users", NavIcon::Users),
            entry("Courses", "/admin/courses", NavIcon::BookOpen),
            entry("Tutors", "/admin/tutors", NavIcon::GraduationCap),
            entry("Students", "/admin/students", NavIcon::UserCheck),
            entry("Analytics", "/admin/analytics", NavIcon::BarChart),
            entry("Subscriptions", "/admin/subscriptions", NavIcon::Shield),
            entry("System Settings", "/admin/settings", NavIcon::Settings),
        ]),
    }

    entries.push(entry("Settings", "/settings", NavIcon::Settings));
    entries
}

/// Active-highlighting rule: the root entry matches only the exact root
/// path; every other entry matches the current path by prefix.
pub fn is_active(entry_path: &str, current_path: &str) -> bool {
    if entry_path == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(entry_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ALL_ROLES;

    fn labels(role: Role) -> Vec<&'static str> {
        build_navigation(role).iter().map(|e| e.label).collect()
    }

    #[test]
    fn every_role_gets_dashboard_first_and_settings_last() {
        for role in ALL_ROLES {
            let entries = build_navigation(*role);
            assert!(!entries.is_empty());
            assert_eq!(entries.first().unwrap().path, "/", "{role}");
            assert_eq!(entries.last().unwrap().path, "/settings", "{role}");
        }
    }

    #[test]
    fn role_menus_are_distinct() {
        assert_ne!(labels(Role::Student), labels(Role::Tutor));
        assert_ne!(labels(Role::Tutor), labels(Role::Admin));
        assert_ne!(labels(Role::Student), labels(Role::Admin));
    }

    #[test]
    fn student_menu_order() {
        assert_eq!(
            labels(Role::Student),
            vec![
                "Dashboard",
                "My Courses",
                "Schedule",
                "Assignments",
                "Live Classes",
                "Achievements",
                "Messages",
                "Settings",
            ]
        );
    }

    #[test]
    fn tutor_menu_includes_create_course_and_excludes_achievements() {
        let tutor = labels(Role::Tutor);
        assert!(tutor.contains(&"Create Course"));
        assert!(!tutor.contains(&"Achievements"));
    }

    #[test]
    fn admin_menu_targets_admin_paths() {
        let entries = build_navigation(Role::Admin);
        let role_block = &entries[1..entries.len() - 1];
        assert!(role_block.iter().all(|e| e.path.starts_with("/admin")));
        assert_eq!(role_block.len(), 7);
    }

    #[test]
    fn messages_badge_is_the_fixed_unread_count() {
        for role in [Role::Student, Role::Tutor] {
            let entries = build_navigation(role);
            let messages = entries.iter().find(|e| e.label == "Messages").unwrap();
            assert_eq!(messages.badge, Some(NavBadge::Count(3)), "{role}");
        }
        // The admin menu has no Messages entry.
        assert!(!labels(Role::Admin).contains(&"Messages"));
    }

    #[test]
    fn assignments_dot_is_student_only() {
        let student = build_navigation(Role::Student);
        let assignments = student.iter().find(|e| e.label == "Assignments").unwrap();
        assert_eq!(assignments.badge, Some(NavBadge::Dot));

        let tutor = build_navigation(Role::Tutor);
        let assignments = tutor.iter().find(|e| e.label == "Assignments").unwrap();
        assert_eq!(assignments.badge, None);
    }

    #[test]
    fn root_entry_matches_only_exact_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/courses"));
    }

    #[test]
    fn other_entries_match_by_prefix() {
        assert!(is_active("/courses", "/courses"));
        assert!(is_active("/courses", "/courses/course-1"));
        assert!(is_active("/tutor/courses", "/tutor/courses"));
        assert!(!is_active("/courses", "/assignments"));
    }
}
