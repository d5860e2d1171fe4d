use dioxus::prelude::*;
use platform::navigation::UNREAD_MESSAGE_COUNT;
use shared_ui::{
    Avatar, AvatarFallback, Badge, BadgeVariant, Card, CardContent, PageHeader, PageTitle,
};

use crate::auth::use_directory;

/// Message inbox. The conversation list is fixed demo data; the unread
/// count matches the badge shown in the sidebar.
#[component]
pub fn Messages() -> Element {
    let directory = use_directory();

    // Demo threads reference real directory users so names and initials
    // stay consistent with the rest of the app.
    let threads = [
        ("user-2", "Great progress on the React module!", "2h ago", true),
        ("user-3", "Your dataset question, answered inline.", "5h ago", true),
        ("user-2", "Live session moved to 18:00 today.", "1d ago", true),
        ("user-3", "Welcome to Data Science with Python!", "3d ago", false),
    ];

    let unread = threads.iter().filter(|(_, _, _, u)| *u).count();
    debug_assert_eq!(unread, UNREAD_MESSAGE_COUNT as usize);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./messages.css") }

        div { class: "messages-page",
            PageHeader {
                PageTitle { "Messages" }
            }

            p { class: "messages-summary", "{unread} unread conversations" }

            Card {
                CardContent {
                    div { class: "thread-list",
                        for (idx , (sender_id , preview , when , is_unread)) in threads.iter().enumerate() {
                            if let Some(sender) = directory.user(sender_id) {
                                div {
                                    class: if *is_unread { "thread-row unread" } else { "thread-row" },
                                    key: "{idx}",
                                    Avatar {
                                        AvatarFallback { "{sender.initials()}" }
                                    }
                                    div { class: "thread-info",
                                        span { class: "thread-sender", "{sender.name}" }
                                        span { class: "thread-preview", "{preview}" }
                                    }
                                    div { class: "thread-side",
                                        span { class: "thread-when", "{when}" }
                                        if *is_unread {
                                            Badge { variant: BadgeVariant::Primary, "new" }
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
