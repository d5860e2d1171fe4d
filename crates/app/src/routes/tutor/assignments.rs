use dioxus::prelude::*;
use shared_types::{Assignment, AssignmentStatus, Submission};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageTitle, Separator,
};

use crate::auth::{use_auth, use_directory};

/// Grading view: assignments on the tutor's courses with their submissions.
#[component]
pub fn TutorAssignmentsPage() -> Element {
    let auth = use_auth();
    let directory = use_directory();

    let instructor_id = auth.current_user().map(|u| u.id).unwrap_or_default();
    let assignments: Vec<Assignment> = directory
        .courses_by_instructor(&instructor_id)
        .iter()
        .flat_map(|c| directory.assignments_for_course(&c.id))
        .cloned()
        .collect();

    let awaiting = assignments
        .iter()
        .filter(|a| a.status == AssignmentStatus::Submitted)
        .count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tutor.css") }

        div { class: "tutor-page",
            PageHeader {
                PageTitle { "Assignments" }
            }

            p { class: "tutor-empty", "{awaiting} submissions awaiting a grade" }

            div { class: "tutor-session-list",
                for assignment in assignments {
                    Card { key: "{assignment.id}",
                        CardHeader {
                            div { class: "tutor-assignment-head",
                                div {
                                    CardTitle { "{assignment.title}" }
                                    CardDescription { "{due_points_label(&assignment)}" }
                                }
                                Badge { variant: status_badge(assignment.status),
                                    "{assignment.status.display_name()}"
                                }
                            }
                        }
                        CardContent {
                            if assignment.submissions.is_empty() {
                                p { class: "tutor-empty", "No submissions yet." }
                            }
                            for (idx , submission) in assignment.submissions.iter().enumerate() {
                                if idx > 0 {
                                    Separator {}
                                }
                                div { class: "tutor-submission-row", key: "{submission.id}",
                                    div { class: "tutor-submission-info",
                                        span { class: "tutor-submission-student",
                                            "{submission.student_name}"
                                        }
                                        span { class: "tutor-submission-meta",
                                            "Submitted {submitted_label(submission)}"
                                        }
                                        p { class: "tutor-submission-content", "{submission.content}" }
                                    }
                                    {match submission.grade {
                                        Some(grade) => rsx! {
                                            Badge { variant: BadgeVariant::Primary,
                                                "{grade}/{assignment.max_points}"
                                            }
                                        },
                                        None => rsx! {
                                            Badge { variant: BadgeVariant::Outline, "Ungraded" }
                                        },
                                    }}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn due_points_label(assignment: &Assignment) -> String {
    format!(
        "Due {} \u{b7} {} points",
        assignment.due_date.format("%B %e, %Y"),
        assignment.max_points
    )
}

fn submitted_label(submission: &Submission) -> String {
    submission.submitted_at.format("%b %e, %Y %H:%M").to_string()
}

fn status_badge(status: AssignmentStatus) -> BadgeVariant {
    match status {
        AssignmentStatus::Pending => BadgeVariant::Destructive,
        AssignmentStatus::Submitted => BadgeVariant::Primary,
        AssignmentStatus::Graded => BadgeVariant::Secondary,
    }
}
