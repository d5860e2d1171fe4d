use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle};

/// Weekly schedule. Fixed demo sessions; there is no calendar backend.
#[component]
pub fn Schedule() -> Element {
    let days = [
        (
            "Monday",
            vec![
                ("09:00", "Complete Web Development Bootcamp", "Live session"),
                ("14:00", "Data Science with Python", "Office hours"),
            ],
        ),
        (
            "Wednesday",
            vec![("10:00", "Complete Web Development Bootcamp", "Live session")],
        ),
        (
            "Thursday",
            vec![("16:00", "Data Science with Python", "Q&A session")],
        ),
        (
            "Friday",
            vec![("11:00", "Study group", "Peer session")],
        ),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./schedule.css") }

        div { class: "schedule-page",
            PageHeader {
                PageTitle { "Schedule" }
            }

            div { class: "schedule-grid",
                for (day , sessions) in days {
                    Card { key: "{day}",
                        CardHeader {
                            CardTitle { "{day}" }
                        }
                        CardContent {
                            div { class: "schedule-day",
                                for (time , title , kind) in sessions {
                                    div { class: "schedule-session", key: "{day}-{time}",
                                        span { class: "schedule-time", "{time}" }
                                        div { class: "schedule-session-info",
                                            span { class: "schedule-session-title", "{title}" }
                                            Badge { variant: BadgeVariant::Outline, "{kind}" }
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
}
