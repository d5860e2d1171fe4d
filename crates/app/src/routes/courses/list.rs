use dioxus::prelude::*;
use shared_types::Course;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, Input, PageHeader, PageTitle, Progress,
    ProgressIndicator, SearchBar,
};

use crate::auth::use_directory;
use crate::routes::Route;

/// Course catalog. Enrolled courses show a progress bar; the rest show
/// their price. The search filter matches title, instructor, and category.
#[component]
pub fn CourseListPage() -> Element {
    let directory = use_directory();
    let mut query = use_signal(String::new);

    let needle = query().to_lowercase();
    let courses: Vec<Course> = directory
        .courses()
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.title.to_lowercase().contains(&needle)
                || c.instructor.to_lowercase().contains(&needle)
                || c.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courses.css") }

        div { class: "courses-page",
            PageHeader {
                PageTitle { "My Courses" }
            }

            SearchBar {
                Input {
                    placeholder: "Search by title, instructor, or category",
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
            }

            if courses.is_empty() {
                p { class: "courses-empty", "No courses match your search." }
            }

            div { class: "course-grid",
                for course in courses {
                    CourseCard { course: course.clone(), key: "{course.id}" }
                }
            }
        }
    }
}

#[component]
pub fn CourseCard(course: Course) -> Element {
    rsx! {
        Link {
            to: Route::CourseDetail { course_id: course.id.clone() },
            class: "course-card-link",
            Card {
                class: "course-card",
                img { class: "course-thumb", src: "{course.thumbnail}", alt: "{course.title}" }
                CardContent {
                    div { class: "course-card-top",
                        Badge { variant: BadgeVariant::Outline, "{course.category}" }
                        Badge { variant: BadgeVariant::Secondary, "{course.level.as_str()}" }
                    }
                    h3 { class: "course-card-title", "{course.title}" }
                    p { class: "course-card-instructor", "by {course.instructor}" }
                    div { class: "course-card-meta",
                        span { "\u{2b50} {course.rating}" }
                        span { "{course.students} students" }
                        span { "{course.duration}" }
                    }
                    if course.is_enrolled {
                        div { class: "course-card-progress",
                            Progress {
                                value: Some(course.progress.unwrap_or(0) as f64),
                                ProgressIndicator {}
                            }
                            span { "{course.progress.unwrap_or(0)}% complete" }
                        }
                    } else {
                        span { class: "course-card-price", "${course.price}" }
                    }
                }
            }
        }
    }
}
