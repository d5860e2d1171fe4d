use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle, Progress,
    ProgressIndicator,
};

use crate::auth::{use_auth, use_directory};

/// Per-course engagement overview for the tutor. Enrollment figures come
/// from the directory; the completion rates are fixed demo values.
#[component]
pub fn TutorAnalyticsPage() -> Element {
    let auth = use_auth();
    let directory = use_directory();

    let instructor_id = auth.current_user().map(|u| u.id).unwrap_or_default();
    let courses: Vec<_> = directory
        .courses_by_instructor(&instructor_id)
        .into_iter()
        .cloned()
        .collect();

    let total_students: u32 = courses.iter().map(|c| c.students).sum();
    let revenue: f64 = courses.iter().map(|c| c.price * c.students as f64).sum();

    // Completion percentage per course, keyed by position.
    let completion_rates = [68.0f64, 54.0, 71.0, 47.0];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tutor.css") }

        div { class: "tutor-page",
            PageHeader {
                PageTitle { "Analytics" }
            }

            div { class: "tutor-stat-grid",
                Card {
                    CardHeader {
                        CardDescription { "Total Enrollments" }
                    }
                    CardContent {
                        span { class: "tutor-stat-value", "{total_students}" }
                    }
                }
                Card {
                    CardHeader {
                        CardDescription { "Lifetime Revenue" }
                    }
                    CardContent {
                        span { class: "tutor-stat-value", "${revenue:.0}" }
                    }
                }
                Card {
                    CardHeader {
                        CardDescription { "Published Courses" }
                    }
                    CardContent {
                        span { class: "tutor-stat-value", "{courses.len()}" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Completion Rates" }
                    CardDescription { "Share of enrolled students finishing each course" }
                }
                CardContent {
                    div { class: "tutor-completion-list",
                        for (idx , course) in courses.iter().enumerate() {
                            div { class: "tutor-completion-row", key: "{course.id}",
                                span { class: "tutor-completion-title", "{course.title}" }
                                div { class: "tutor-completion-bar",
                                    Progress {
                                        value: Some(completion_rates[idx % completion_rates.len()]),
                                        ProgressIndicator {}
                                    }
                                    span { "{completion_rates[idx % completion_rates.len()]:.0}%" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
