use dioxus::prelude::*;
use shared_types::{AssignmentStatus, Role};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageTitle, Progress, ProgressIndicator,
};

use crate::auth::{use_auth, use_directory, use_role};
use crate::routes::{admin, tutor, Route};
use crate::ProfileState;

/// Dashboard landing page. Dispatches on the current role so each identity
/// sees its own home view at the root path.
#[component]
pub fn Dashboard() -> Element {
    let role = use_role().unwrap_or_default();

    match role {
        Role::Student => StudentDashboard(),
        Role::Tutor => TutorDashboard(),
        Role::Admin => admin::dashboard::AdminDashboardPage(),
    }
}

#[component]
fn StudentDashboard() -> Element {
    let directory = use_directory();
    let profile: ProfileState = use_context();

    let enrolled = directory.enrolled_courses();
    let pending = directory
        .assignments()
        .iter()
        .filter(|a| a.status == AssignmentStatus::Pending)
        .count();
    let total_completed: usize = enrolled.iter().map(|c| c.completed_modules()).sum();
    let avg_progress = if enrolled.is_empty() {
        0.0
    } else {
        enrolled
            .iter()
            .map(|c| c.progress.unwrap_or(0) as f64)
            .sum::<f64>()
            / enrolled.len() as f64
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Welcome back, {profile.display_name}" }
            }

            div { class: "stat-grid",
                StatCard { label: "Enrolled Courses", value: "{enrolled.len()}" }
                StatCard { label: "Lessons Completed", value: "{total_completed}" }
                StatCard { label: "Pending Assignments", value: "{pending}" }
                StatCard { label: "Average Progress", value: "{avg_progress:.0}%" }
            }

            Card {
                CardHeader {
                    CardTitle { "Continue Learning" }
                    CardDescription { "Pick up where you left off" }
                }
                CardContent {
                    div { class: "course-progress-list",
                        for course in enrolled.iter() {
                            Link {
                                to: Route::CourseDetail { course_id: course.id.clone() },
                                class: "course-progress-row",
                                key: "{course.id}",
                                div { class: "course-progress-info",
                                    span { class: "course-progress-title", "{course.title}" }
                                    span { class: "course-progress-meta",
                                        "{course.completed_modules()} of {course.modules.len()} lessons"
                                    }
                                }
                                div { class: "course-progress-bar",
                                    Progress {
                                        value: Some(course.progress.unwrap_or(0) as f64),
                                        ProgressIndicator {}
                                    }
                                    span { class: "course-progress-pct",
                                        "{course.progress.unwrap_or(0)}%"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Upcoming Assignments" }
                }
                CardContent {
                    div { class: "assignment-list",
                        for assignment in directory.assignments().iter() {
                            div { class: "assignment-row", key: "{assignment.id}",
                                div { class: "assignment-info",
                                    span { class: "assignment-title", "{assignment.title}" }
                                    span { class: "assignment-meta",
                                        "Due {due_label(assignment.due_date)}"
                                    }
                                }
                                Badge { variant: status_badge(assignment.status),
                                    "{assignment.status.display_name()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TutorDashboard() -> Element {
    let directory = use_directory();
    let auth = use_auth();

    let instructor_id = auth
        .current_user()
        .map(|u| u.id)
        .unwrap_or_default();
    let courses = directory.courses_by_instructor(&instructor_id);
    let total_students: u32 = courses.iter().map(|c| c.students).sum();
    let avg_rating = if courses.is_empty() {
        0.0
    } else {
        courses.iter().map(|c| c.rating).sum::<f64>() / courses.len() as f64
    };
    let revenue: f64 = courses
        .iter()
        .map(|c| c.price * c.students as f64)
        .sum();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Tutor Dashboard" }
            }

            div { class: "stat-grid",
                StatCard { label: "Active Courses", value: "{courses.len()}" }
                StatCard { label: "Total Students", value: "{total_students}" }
                StatCard { label: "Average Rating", value: "{avg_rating:.1}" }
                StatCard { label: "Total Revenue", value: "${revenue:.0}" }
            }

            tutor::courses::CourseSummaryTable { courses: courses.into_iter().cloned().collect::<Vec<_>>() }
        }
    }
}

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardDescription { "{label}" }
            }
            CardContent {
                span { class: "stat-value", "{value}" }
            }
        }
    }
}

fn status_badge(status: AssignmentStatus) -> BadgeVariant {
    match status {
        AssignmentStatus::Pending => BadgeVariant::Destructive,
        AssignmentStatus::Submitted => BadgeVariant::Primary,
        AssignmentStatus::Graded => BadgeVariant::Secondary,
    }
}

fn due_label(date: chrono::NaiveDate) -> String {
    date.format("%b %e, %Y").to_string()
}
