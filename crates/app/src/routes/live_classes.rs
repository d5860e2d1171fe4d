use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlay;
use dioxus_free_icons::Icon;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, PageHeader, PageTitle,
};

/// Upcoming live classes for the student. Fixed demo sessions; the join
/// button is cosmetic since there is no streaming backend.
#[component]
pub fn LiveClasses() -> Element {
    let classes = [
        (
            "Building REST APIs with Node.js",
            "Complete Web Development Bootcamp",
            "Today, 18:00",
            true,
        ),
        (
            "Pandas Deep Dive",
            "Data Science with Python",
            "Tomorrow, 16:00",
            false,
        ),
        (
            "Career Q&A: Breaking into Tech",
            "Community event",
            "Friday, 19:00",
            false,
        ),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./live_classes.css") }

        div { class: "live-classes-page",
            PageHeader {
                PageTitle { "Live Classes" }
            }

            div { class: "live-classes-list",
                for (title , course , when , starting_soon) in classes {
                    Card { key: "{title}",
                        CardHeader {
                            div { class: "live-class-head",
                                div {
                                    CardTitle { "{title}" }
                                    CardDescription { "{course}" }
                                }
                                if starting_soon {
                                    Badge { variant: BadgeVariant::Destructive, "Starting soon" }
                                }
                            }
                        }
                        CardContent {
                            div { class: "live-class-row",
                                span { class: "live-class-when", "{when}" }
                                Button { variant: ButtonVariant::Primary,
                                    Icon::<LdPlay> { icon: LdPlay, width: 16, height: 16 }
                                    "Join"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
