use chrono::{NaiveDate, TimeZone, Utc};
use shared_types::{
    Assignment, AssignmentStatus, Course, CourseLevel, CourseModule, ModuleKind, Role, Submission,
    User,
};

/// The fixed, read-only collections backing a session: users, courses, and
/// assignments. Seeded once at startup and never mutated; "write" actions
/// in the UI only touch local component state.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    users: Vec<User>,
    courses: Vec<Course>,
    assignments: Vec<Assignment>,
}

impl Directory {
    /// Build the demo dataset: one student, two tutors, one admin, four
    /// courses, and three assignments (one already graded).
    pub fn seed() -> Self {
        Self {
            users: seed_users(),
            courses: seed_courses(),
            assignments: seed_assignments(),
        }
    }

    /// The identity preloaded at session start.
    pub fn default_user(&self) -> &User {
        &self.users[0]
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn users_by_role(&self, role: Role) -> Vec<&User> {
        self.users.iter().filter(|u| u.role == role).collect()
    }

    /// First directory entry with the given role. Used by login, which
    /// authenticates a role rather than a specific record.
    pub fn first_with_role(&self, role: Role) -> Option<&User> {
        self.users.iter().find(|u| u.role == role)
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn courses_by_instructor(&self, instructor_id: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.instructor_id == instructor_id)
            .collect()
    }

    pub fn enrolled_courses(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.is_enrolled).collect()
    }

    pub fn assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignments_for_course(&self, course_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.course_id == course_id)
            .collect()
    }
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "user-1".into(),
            name: "Alex Johnson".into(),
            email: "alex@example.com".into(),
            role: Role::Student,
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face".into(),
            bio: None,
            enrolled_courses: vec!["course-1".into(), "course-2".into(), "course-3".into()],
            taught_courses: vec![],
        },
        User {
            id: "user-2".into(),
            name: "Sarah Wilson".into(),
            email: "sarah@example.com".into(),
            role: Role::Tutor,
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b662?w=150&h=150&fit=crop&crop=face".into(),
            bio: None,
            enrolled_courses: vec![],
            taught_courses: vec!["course-1".into(), "course-4".into()],
        },
        User {
            id: "user-3".into(),
            name: "Dr. Michael Chen".into(),
            email: "michael@example.com".into(),
            role: Role::Tutor,
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".into(),
            bio: None,
            enrolled_courses: vec![],
            taught_courses: vec!["course-2".into(), "course-3".into()],
        },
        User {
            id: "user-4".into(),
            name: "Admin User".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
            avatar: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=150&h=150&fit=crop&crop=face".into(),
            bio: None,
            enrolled_courses: vec![],
            taught_courses: vec![],
        },
    ]
}

fn module(id: &str, title: &str, duration: &str, completed: bool, kind: ModuleKind) -> CourseModule {
    CourseModule {
        id: id.into(),
        title: title.into(),
        duration: duration.into(),
        completed,
        kind,
    }
}

fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: "course-1".into(),
            title: "Complete Web Development Bootcamp".into(),
            description: "Learn HTML, CSS, JavaScript, React, Node.js, and MongoDB from scratch"
                .into(),
            thumbnail: "https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=400&h=250&fit=crop".into(),
            instructor: "Sarah Wilson".into(),
            instructor_id: "user-2".into(),
            duration: "40 hours".into(),
            level: CourseLevel::Beginner,
            price: 89.99,
            rating: 4.8,
            students: 1234,
            progress: Some(65),
            category: "Programming".into(),
            is_enrolled: true,
            modules: vec![
                module("mod-1", "HTML Basics", "2h", true, ModuleKind::Video),
                module("mod-2", "CSS Fundamentals", "3h", true, ModuleKind::Video),
                module("mod-3", "JavaScript Essentials", "4h", false, ModuleKind::Video),
                module("mod-4", "React Introduction", "5h", false, ModuleKind::Video),
                module("mod-5", "Final Project", "1h", false, ModuleKind::Assignment),
            ],
        },
        Course {
            id: "course-2".into(),
            title: "Data Science with Python".into(),
            description: "Master data analysis, visualization, and machine learning with Python"
                .into(),
            thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=250&fit=crop".into(),
            instructor: "Dr. Michael Chen".into(),
            instructor_id: "user-3".into(),
            duration: "35 hours".into(),
            level: CourseLevel::Intermediate,
            price: 129.99,
            rating: 4.9,
            students: 892,
            progress: Some(30),
            category: "Data Science".into(),
            is_enrolled: true,
            modules: vec![
                module("mod-6", "Python Basics", "3h", true, ModuleKind::Video),
                module("mod-7", "NumPy & Pandas", "4h", false, ModuleKind::Video),
                module("mod-8", "Data Visualization", "3h", false, ModuleKind::Video),
                module("mod-9", "Machine Learning", "6h", false, ModuleKind::Video),
            ],
        },
        Course {
            id: "course-3".into(),
            title: "Digital Marketing Masterclass".into(),
            description: "Complete guide to social media, SEO, and content marketing".into(),
            thumbnail: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=250&fit=crop".into(),
            instructor: "Dr. Michael Chen".into(),
            instructor_id: "user-3".into(),
            duration: "25 hours".into(),
            level: CourseLevel::Beginner,
            price: 79.99,
            rating: 4.7,
            students: 567,
            progress: Some(80),
            category: "Marketing".into(),
            is_enrolled: true,
            modules: vec![
                module("mod-10", "Marketing Fundamentals", "2h", true, ModuleKind::Video),
                module("mod-11", "Social Media Strategy", "3h", true, ModuleKind::Video),
                module("mod-12", "SEO Basics", "2h", true, ModuleKind::Video),
                module("mod-13", "Content Creation", "4h", false, ModuleKind::Video),
            ],
        },
        Course {
            id: "course-4".into(),
            title: "UI/UX Design Principles".into(),
            description: "Learn design thinking, prototyping, and user experience design".into(),
            thumbnail: "https://images.unsplash.com/photo-1545235617-7a424c1a60cc?w=400&h=250&fit=crop".into(),
            instructor: "Sarah Wilson".into(),
            instructor_id: "user-2".into(),
            duration: "30 hours".into(),
            level: CourseLevel::Intermediate,
            price: 99.99,
            rating: 4.6,
            students: 445,
            progress: None,
            category: "Design".into(),
            is_enrolled: false,
            modules: vec![
                module("mod-14", "Design Thinking", "2h", false, ModuleKind::Video),
                module("mod-15", "Wireframing", "3h", false, ModuleKind::Video),
                module("mod-16", "Prototyping", "4h", false, ModuleKind::Video),
            ],
        },
    ]
}

fn seed_assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: "assign-1".into(),
            title: "Build a Portfolio Website".into(),
            description: "Create a responsive portfolio website using HTML, CSS, and JavaScript"
                .into(),
            course_id: "course-1".into(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid seed date"),
            max_points: 100,
            status: AssignmentStatus::Pending,
            submissions: vec![Submission {
                id: "sub-1".into(),
                student_id: "user-1".into(),
                student_name: "Alex Johnson".into(),
                assignment_id: "assign-1".into(),
                submitted_at: Utc
                    .with_ymd_and_hms(2024, 1, 10, 10, 30, 0)
                    .single()
                    .expect("valid seed timestamp"),
                content: "I have created a responsive portfolio website with modern design..."
                    .into(),
                attachments: vec!["portfolio.zip".into(), "screenshots.pdf".into()],
                grade: Some(95),
                feedback: Some("Excellent work! Great attention to detail and clean code.".into()),
            }],
        },
        Assignment {
            id: "assign-2".into(),
            title: "Data Analysis Project".into(),
            description: "Analyze the provided dataset and create visualizations using Python"
                .into(),
            course_id: "course-2".into(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid seed date"),
            max_points: 100,
            status: AssignmentStatus::Submitted,
            submissions: vec![],
        },
        Assignment {
            id: "assign-3".into(),
            title: "Marketing Campaign Design".into(),
            description: "Design a complete social media marketing campaign for a fictional product"
                .into(),
            course_id: "course-3".into(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 25).expect("valid seed date"),
            max_points: 80,
            status: AssignmentStatus::Graded,
            submissions: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_user_is_the_student() {
        let dir = Directory::seed();
        assert_eq!(dir.default_user().id, "user-1");
        assert_eq!(dir.default_user().role, Role::Student);
    }

    #[test]
    fn lookup_by_id() {
        let dir = Directory::seed();
        assert_eq!(dir.user("user-3").map(|u| u.name.as_str()), Some("Dr. Michael Chen"));
        assert!(dir.user("user-99").is_none());
    }

    #[test]
    fn filter_by_role() {
        let dir = Directory::seed();
        assert_eq!(dir.users_by_role(Role::Student).len(), 1);
        assert_eq!(dir.users_by_role(Role::Tutor).len(), 2);
        assert_eq!(dir.users_by_role(Role::Admin).len(), 1);
    }

    #[test]
    fn every_instructor_id_references_a_tutor() {
        let dir = Directory::seed();
        for course in dir.courses() {
            let instructor = dir
                .user(&course.instructor_id)
                .unwrap_or_else(|| panic!("missing instructor for {}", course.id));
            assert_eq!(instructor.role, Role::Tutor, "course {}", course.id);
            assert_eq!(instructor.name, course.instructor);
        }
    }

    #[test]
    fn every_assignment_references_an_existing_course() {
        let dir = Directory::seed();
        for assignment in dir.assignments() {
            assert!(
                dir.course(&assignment.course_id).is_some(),
                "assignment {} points at missing course {}",
                assignment.id,
                assignment.course_id
            );
        }
    }

    #[test]
    fn module_order_is_insertion_ordered() {
        let dir = Directory::seed();
        let course = dir.course("course-1").unwrap();
        let ids: Vec<&str> = course.modules.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["mod-1", "mod-2", "mod-3", "mod-4", "mod-5"]);
    }

    #[test]
    fn courses_by_instructor_matches_taught_courses() {
        let dir = Directory::seed();
        let taught: Vec<&str> = dir
            .courses_by_instructor("user-2")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(taught, vec!["course-1", "course-4"]);
    }

    #[test]
    fn assignments_for_course_filters_by_back_reference() {
        let dir = Directory::seed();
        let for_course_1 = dir.assignments_for_course("course-1");
        assert_eq!(for_course_1.len(), 1);
        assert_eq!(for_course_1[0].id, "assign-1");
        assert!(dir.assignments_for_course("course-4").is_empty());
    }
}
