use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle, Progress,
    ProgressIndicator,
};

use crate::auth::use_directory;
use crate::routes::admin::dashboard::AdminStat;

/// Platform-wide analytics. Figures are derived from the fixed catalog,
/// with enrollment share shown per category.
#[component]
pub fn AdminAnalyticsPage() -> Element {
    let directory = use_directory();
    let courses = directory.courses();

    let total_enrollments: u32 = courses.iter().map(|c| c.students).sum();
    let revenue: f64 = courses.iter().map(|c| c.price * c.students as f64).sum();
    let avg_rating = if courses.is_empty() {
        0.0
    } else {
        courses.iter().map(|c| c.rating).sum::<f64>() / courses.len() as f64
    };

    // Enrollment share per category.
    let mut categories: Vec<(String, u32)> = Vec::new();
    for course in courses {
        match categories.iter_mut().find(|(name, _)| *name == course.category) {
            Some((_, count)) => *count += course.students,
            None => categories.push((course.category.clone(), course.students)),
        }
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Analytics" }
            }

            div { class: "admin-stat-grid",
                AdminStat { label: "Total Enrollments", value: "{total_enrollments}" }
                AdminStat { label: "Gross Revenue", value: "${revenue:.0}" }
                AdminStat { label: "Average Rating", value: "{avg_rating:.1}" }
            }

            Card {
                CardHeader {
                    CardTitle { "Enrollments by Category" }
                    CardDescription { "Share of all enrollments per catalog category" }
                }
                CardContent {
                    div { class: "admin-category-list",
                        for (category , count) in categories {
                            div { class: "admin-category-row", key: "{category}",
                                span { class: "admin-category-name", "{category}" }
                                div { class: "admin-category-bar",
                                    Progress {
                                        value: Some(if total_enrollments == 0 {
                                            0.0
                                        } else {
                                            count as f64 / total_enrollments as f64 * 100.0
                                        }),
                                        ProgressIndicator {}
                                    }
                                    span { "{count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
