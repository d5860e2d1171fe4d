use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Card, CardContent, CardDescription, CardHeader,
    CardTitle, PageHeader, PageTitle,
};

use crate::auth::use_directory;

/// Tutor roster with their course and enrollment footprint.
#[component]
pub fn AdminTutorsPage() -> Element {
    let directory = use_directory();
    let tutors: Vec<_> = directory
        .users_by_role(Role::Tutor)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Tutors" }
            }

            div { class: "admin-card-grid",
                for tutor in tutors {
                    Card { key: "{tutor.id}",
                        CardHeader {
                            div { class: "admin-user-cell",
                                Avatar {
                                    if !tutor.avatar.is_empty() {
                                        AvatarImage { src: tutor.avatar.clone() }
                                    }
                                    AvatarFallback { "{tutor.initials()}" }
                                }
                                div {
                                    CardTitle { "{tutor.name}" }
                                    CardDescription { "{tutor.email}" }
                                }
                            }
                        }
                        CardContent {
                            {
                                let courses = directory.courses_by_instructor(&tutor.id);
                                let students: u32 = courses.iter().map(|c| c.students).sum();
                                rsx! {
                                    div { class: "admin-tutor-facts",
                                        span { "{courses.len()} courses" }
                                        span { "{students} enrollments" }
                                    }
                                }
                            }
                            if let Some(bio) = tutor.bio.as_ref() {
                                p { class: "admin-tutor-bio", "{bio}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
