use dioxus::prelude::*;
use shared_types::{Assignment, AssignmentStatus, Submission};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageTitle,
};

use crate::auth::use_directory;

/// Student assignments view grouped by lifecycle state.
#[component]
pub fn Assignments() -> Element {
    let directory = use_directory();
    let assignments: Vec<Assignment> = directory.assignments().to_vec();

    let pending = assignments
        .iter()
        .filter(|a| a.status == AssignmentStatus::Pending)
        .count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./assignments.css") }

        div { class: "assignments-page",
            PageHeader {
                PageTitle { "Assignments" }
            }

            p { class: "assignments-summary",
                "{pending} pending out of {assignments.len()} total"
            }

            div { class: "assignments-list",
                for assignment in assignments {
                    AssignmentCard { assignment: assignment.clone(), key: "{assignment.id}" }
                }
            }
        }
    }
}

#[component]
fn AssignmentCard(assignment: Assignment) -> Element {
    let directory = use_directory();
    let course_title = directory
        .course(&assignment.course_id)
        .map(|c| c.title.clone())
        .unwrap_or_else(|| assignment.course_id.clone());

    // The demo directory carries at most one submission per assignment.
    let submission = assignment.submissions.first();
    let due = assignment.due_date.format("%B %e, %Y").to_string();

    rsx! {
        Card {
            CardHeader {
                div { class: "assignment-card-head",
                    div {
                        CardTitle { "{assignment.title}" }
                        CardDescription { "{course_title}" }
                    }
                    Badge { variant: status_badge(assignment.status),
                        "{assignment.status.display_name()}"
                    }
                }
            }
            CardContent {
                p { class: "assignment-description", "{assignment.description}" }
                div { class: "assignment-facts",
                    span { "Due {due}" }
                    span { "{assignment.max_points} points" }
                }
                if let Some(submission) = submission {
                    div { class: "submission-box",
                        div { class: "submission-head",
                            span { "Submitted {submitted_label(submission)}" }
                            if let Some(grade) = submission.grade {
                                Badge { variant: BadgeVariant::Primary,
                                    "{grade}/{assignment.max_points}"
                                }
                            }
                        }
                        if let Some(feedback) = submission.feedback.as_ref() {
                            p { class: "submission-feedback", "\u{201c}{feedback}\u{201d}" }
                        }
                    }
                }
            }
        }
    }
}

fn submitted_label(submission: &Submission) -> String {
    submission.submitted_at.format("%b %e, %Y").to_string()
}

fn status_badge(status: AssignmentStatus) -> BadgeVariant {
    match status {
        AssignmentStatus::Pending => BadgeVariant::Destructive,
        AssignmentStatus::Submitted => BadgeVariant::Primary,
        AssignmentStatus::Graded => BadgeVariant::Secondary,
    }
}
