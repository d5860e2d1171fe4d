use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, PageHeader, PageTitle,
};

/// Sessions the tutor is scheduled to host. Fixed demo data.
#[component]
pub fn TutorLiveClassesPage() -> Element {
    let sessions = [
        (
            "Building REST APIs with Node.js",
            "Complete Web Development Bootcamp",
            "Today, 18:00",
            42u32,
        ),
        (
            "React Hooks Workshop",
            "Complete Web Development Bootcamp",
            "Thursday, 17:00",
            31,
        ),
        (
            "Office Hours",
            "Open to all enrolled students",
            "Friday, 15:00",
            12,
        ),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tutor.css") }

        div { class: "tutor-page",
            PageHeader {
                PageTitle { "Live Classes" }
            }

            div { class: "tutor-session-list",
                for (title , course , when , registered) in sessions {
                    Card { key: "{title}",
                        CardHeader {
                            CardTitle { "{title}" }
                            CardDescription { "{course}" }
                        }
                        CardContent {
                            div { class: "tutor-session-row",
                                div { class: "tutor-session-facts",
                                    span { "{when}" }
                                    Badge { variant: BadgeVariant::Secondary,
                                        "{registered} registered"
                                    }
                                }
                                Button { variant: ButtonVariant::Outline, "Start Session" }
                            }
                        }
                    }
                }
            }
        }
    }
}
