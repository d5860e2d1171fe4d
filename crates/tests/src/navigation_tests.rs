use pretty_assertions::assert_eq;
use platform::{build_navigation, is_active, NavBadge, UNREAD_MESSAGE_COUNT};
use shared_types::Role;

fn labels(role: Role) -> Vec<&'static str> {
    build_navigation(role).iter().map(|e| e.label).collect()
}

#[test]
fn student_menu_matches_the_product_layout() {
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
fn tutor_menu_matches_the_product_layout() {
    assert_eq!(
        labels(Role::Tutor),
        vec![
            "Dashboard",
            "My Courses",
            "Create Course",
            "Students",
            "Live Classes",
            "Assignments",
            "Analytics",
            "Messages",
            "Settings",
        ]
    );
}

#[test]
fn admin_menu_matches_the_product_layout() {
    assert_eq!(
        labels(Role::Admin),
        vec![
            "Dashboard",
            "Users",
            "Courses",
            "Tutors",
            "Students",
            "Analytics",
            "Subscriptions",
            "System Settings",
            "Settings",
        ]
    );
}

#[test]
fn shared_labels_point_at_role_specific_paths() {
    let student = build_navigation(Role::Student);
    let tutor = build_navigation(Role::Tutor);

    let student_courses = student.iter().find(|e| e.label == "My Courses").unwrap();
    let tutor_courses = tutor.iter().find(|e| e.label == "My Courses").unwrap();
    assert_eq!(student_courses.path, "/courses");
    assert_eq!(tutor_courses.path, "/tutor/courses");
}

#[test]
fn badges_appear_only_where_the_product_shows_them() {
    for role in [Role::Student, Role::Tutor, Role::Admin] {
        for entry in build_navigation(role) {
            match (role, entry.label) {
                (_, "Messages") => {
                    assert_eq!(entry.badge, Some(NavBadge::Count(UNREAD_MESSAGE_COUNT)))
                }
                (Role::Student, "Assignments") => assert_eq!(entry.badge, Some(NavBadge::Dot)),
                _ => assert_eq!(entry.badge, None, "{role} / {}", entry.label),
            }
        }
    }
}

#[test]
fn rebuilding_for_the_same_role_is_stable() {
    for role in [Role::Student, Role::Tutor, Role::Admin] {
        assert_eq!(build_navigation(role), build_navigation(role));
    }
}

#[test]
fn active_rule_is_exact_for_root_and_prefix_elsewhere() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/messages"));

    assert!(is_active("/courses", "/courses/course-3"));
    assert!(is_active("/admin/users", "/admin/users"));
    assert!(!is_active("/admin/users", "/admin"));
}
