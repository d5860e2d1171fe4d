use pretty_assertions::assert_eq;
use shared_types::{AssignmentStatus, Role};

use crate::common;

#[test]
fn seed_has_one_account_per_credential_role() {
    let dir = common::directory();
    for role in [Role::Student, Role::Tutor, Role::Admin] {
        assert!(
            dir.first_with_role(role).is_some(),
            "no directory record for {role}"
        );
    }
}

#[test]
fn default_user_is_the_student() {
    let dir = common::directory();
    let user = dir.default_user();
    assert_eq!(user.id, "user-1");
    assert_eq!(user.role, Role::Student);
}

#[test]
fn every_course_instructor_is_a_tutor() {
    let dir = common::directory();
    for course in dir.courses() {
        let instructor = dir
            .user(&course.instructor_id)
            .unwrap_or_else(|| panic!("missing instructor for {}", course.id));
        assert_eq!(instructor.role, Role::Tutor, "{}", course.id);
        assert_eq!(instructor.name, course.instructor, "{}", course.id);
    }
}

#[test]
fn every_assignment_references_a_known_course() {
    let dir = common::directory();
    for assignment in dir.assignments() {
        assert!(
            dir.course(&assignment.course_id).is_some(),
            "dangling course_id on {}",
            assignment.id
        );
    }
}

#[test]
fn enrolled_courses_carry_progress() {
    let dir = common::directory();
    let enrolled = dir.enrolled_courses();
    assert!(!enrolled.is_empty());
    for course in enrolled {
        assert!(course.progress.is_some(), "{} lacks progress", course.id);
    }
}

#[test]
fn graded_submissions_stay_within_max_points() {
    let dir = common::directory();
    for assignment in dir.assignments() {
        for submission in &assignment.submissions {
            if let Some(grade) = submission.grade {
                assert!(
                    grade <= assignment.max_points,
                    "{} grade {grade} over max {}",
                    assignment.id,
                    assignment.max_points
                );
            }
        }
    }
}

#[test]
fn there_is_at_least_one_pending_assignment() {
    // The student sidebar shows a pending-work dot; the dataset backs it up.
    let dir = common::directory();
    assert!(dir
        .assignments()
        .iter()
        .any(|a| a.status == AssignmentStatus::Pending));
}

#[test]
fn lookups_by_unknown_id_return_none() {
    let dir = common::directory();
    assert!(dir.user("user-404").is_none());
    assert!(dir.course("course-404").is_none());
    assert!(dir.assignment("assign-404").is_none());
}
