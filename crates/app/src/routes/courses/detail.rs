use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdPlay};
use dioxus_free_icons::Icon;
use shared_types::ModuleKind;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Card, CardContent, CardHeader,
    CardTitle, Progress, ProgressIndicator, Separator,
};

use crate::auth::use_directory;
use crate::routes::Route;

/// Course detail view. Unknown ids render an inline not-found card rather
/// than redirecting, so the URL stays shareable.
#[component]
pub fn CourseDetailPage(course_id: String) -> Element {
    let directory = use_directory();

    let Some(course) = directory.course(&course_id).cloned() else {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./courses.css") }
            Card {
                CardHeader {
                    CardTitle { "Course not found" }
                }
                CardContent {
                    p { "No course with id "
                        code { "{course_id}" }
                        " exists in the catalog."
                    }
                    Link { to: Route::CourseList {}, "Back to courses" }
                }
            }
        };
    };

    let instructor = directory.user(&course.instructor_id).cloned();
    let progress = course.progress.unwrap_or(0);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courses.css") }

        div { class: "course-detail-page",
            div { class: "course-detail-hero",
                img { class: "course-detail-thumb", src: "{course.thumbnail}", alt: "{course.title}" }
                div { class: "course-detail-head",
                    div { class: "course-card-top",
                        Badge { variant: BadgeVariant::Outline, "{course.category}" }
                        Badge { variant: BadgeVariant::Secondary, "{course.level.as_str()}" }
                    }
                    h1 { "{course.title}" }
                    p { class: "course-detail-description", "{course.description}" }
                    div { class: "course-card-meta",
                        span { "\u{2b50} {course.rating}" }
                        span { "{course.students} students" }
                        span { "{course.duration}" }
                    }
                    if course.is_enrolled {
                        div { class: "course-card-progress",
                            Progress {
                                value: Some(progress as f64),
                                ProgressIndicator {}
                            }
                            span { "{progress}% complete, {course.completed_modules()} of {course.modules.len()} lessons" }
                        }
                    } else {
                        span { class: "course-card-price", "${course.price}" }
                    }
                }
            }

            div { class: "course-detail-columns",
                Card {
                    class: "course-detail-modules",
                    CardHeader {
                        CardTitle { "Course Content" }
                    }
                    CardContent {
                        for (idx , module) in course.modules.iter().enumerate() {
                            if idx > 0 {
                                Separator {}
                            }
                            div { class: "module-row", key: "{module.id}",
                                span {
                                    class: if module.completed { "module-check done" } else { "module-check" },
                                    if module.completed { "\u{2713}" } else { "{idx + 1}" }
                                }
                                div { class: "module-info",
                                    span { class: "module-title", "{module.title}" }
                                    span { class: "module-meta",
                                        "{module.kind.as_str()} \u{b7} {module.duration}"
                                    }
                                }
                                {module_icon(module.kind)}
                            }
                        }
                    }
                }

                if let Some(instructor) = instructor {
                    Card {
                        class: "course-detail-instructor",
                        CardHeader {
                            CardTitle { "Instructor" }
                        }
                        CardContent {
                            div { class: "instructor-row",
                                Avatar {
                                    AvatarImage { src: instructor.avatar.clone() }
                                    AvatarFallback { "{instructor.initials()}" }
                                }
                                div { class: "instructor-info",
                                    span { class: "instructor-name", "{instructor.name}" }
                                    span { class: "instructor-email", "{instructor.email}" }
                                }
                            }
                            if let Some(bio) = instructor.bio.as_ref() {
                                p { class: "instructor-bio", "{bio}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn module_icon(kind: ModuleKind) -> Element {
    match kind {
        ModuleKind::Video => {
            rsx! { Icon::<LdPlay> { icon: LdPlay, width: 16, height: 16 } }
        }
        _ => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 } },
    }
}
