use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Card, CardContent, CardHeader,
    CardTitle, PageHeader, PageTitle, Separator,
};

use crate::auth::{use_auth, use_directory};
use crate::routes::Route;

/// Profile page for the current identity.
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let directory = use_directory();

    let Some(user) = auth.current_user() else {
        // Unreachable behind the guard, but render something sane anyway.
        return rsx! {
            p { "No active session." }
        };
    };

    let courses: Vec<_> = match user.role {
        Role::Student => user
            .enrolled_courses
            .iter()
            .filter_map(|id| directory.course(id))
            .cloned()
            .collect(),
        Role::Tutor => directory
            .courses_by_instructor(&user.id)
            .into_iter()
            .cloned()
            .collect(),
        Role::Admin => Vec::new(),
    };
    let courses_heading = match user.role {
        Role::Tutor => "Courses Taught",
        _ => "Enrolled Courses",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        div { class: "profile-page",
            PageHeader {
                PageTitle { "Profile" }
            }

            Card {
                CardContent {
                    div { class: "profile-identity",
                        Avatar {
                            class: "profile-avatar",
                            if !user.avatar.is_empty() {
                                AvatarImage { src: user.avatar.clone() }
                            }
                            AvatarFallback { "{user.initials()}" }
                        }
                        div { class: "profile-identity-info",
                            h2 { class: "profile-name", "{user.name}" }
                            span { class: "profile-email", "{user.email}" }
                            Badge { variant: role_badge(user.role), "{user.role.display_name()}" }
                        }
                    }

                    if let Some(bio) = user.bio.as_ref() {
                        Separator {}
                        p { class: "profile-bio", "{bio}" }
                    }
                }
            }

            if !courses.is_empty() {
                Card {
                    CardHeader {
                        CardTitle { "{courses_heading}" }
                    }
                    CardContent {
                        ul { class: "profile-course-list",
                            for course in courses {
                                li { key: "{course.id}",
                                    Link {
                                        to: Route::CourseDetail { course_id: course.id.clone() },
                                        "{course.title}"
                                    }
                                    span { class: "profile-course-meta",
                                        " \u{b7} {course.category} \u{b7} {course.level.as_str()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn role_badge(role: Role) -> BadgeVariant {
    match role {
        Role::Student => BadgeVariant::Secondary,
        Role::Tutor => BadgeVariant::Primary,
        Role::Admin => BadgeVariant::Destructive,
    }
}
