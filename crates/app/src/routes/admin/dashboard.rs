use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle,
};

use crate::auth::use_directory;
use crate::routes::Route;

/// Platform overview for administrators.
#[component]
pub fn AdminDashboardPage() -> Element {
    let directory = use_directory();

    let students = directory.users_by_role(Role::Student).len();
    let tutors = directory.users_by_role(Role::Tutor).len();
    let courses = directory.courses();
    let enrollments: u32 = courses.iter().map(|c| c.students).sum();
    let revenue: f64 = courses.iter().map(|c| c.price * c.students as f64).sum();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Admin Dashboard" }
            }

            div { class: "admin-stat-grid",
                AdminStat { label: "Students", value: "{students}" }
                AdminStat { label: "Tutors", value: "{tutors}" }
                AdminStat { label: "Courses", value: "{courses.len()}" }
                AdminStat { label: "Enrollments", value: "{enrollments}" }
                AdminStat { label: "Gross Revenue", value: "${revenue:.0}" }
            }

            div { class: "admin-shortcut-grid",
                AdminShortcut {
                    title: "Users",
                    description: "Browse every account on the platform",
                    to: Route::AdminUsers {},
                }
                AdminShortcut {
                    title: "Courses",
                    description: "Review the published catalog",
                    to: Route::AdminCourses {},
                }
                AdminShortcut {
                    title: "Analytics",
                    description: "Enrollment and revenue breakdowns",
                    to: Route::AdminAnalytics {},
                }
                AdminShortcut {
                    title: "Subscriptions",
                    description: "Plans and billing status",
                    to: Route::AdminSubscriptions {},
                }
            }
        }
    }
}

#[component]
pub fn AdminStat(label: String, value: String) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardDescription { "{label}" }
            }
            CardContent {
                span { class: "admin-stat-value", "{value}" }
            }
        }
    }
}

#[component]
fn AdminShortcut(title: String, description: String, to: Route) -> Element {
    rsx! {
        Link { to: to, class: "admin-shortcut-link",
            Card {
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{description}" }
                }
            }
        }
    }
}
