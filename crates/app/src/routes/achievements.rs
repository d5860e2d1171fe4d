use dioxus::prelude::*;
use shared_ui::{Card, CardContent, PageHeader, PageTitle, Progress, ProgressIndicator};

/// Achievement grid. Earned badges are fixed demo data; locked ones show
/// progress toward the unlock condition.
#[component]
pub fn Achievements() -> Element {
    let achievements = [
        ("\u{1f3af}", "First Steps", "Complete your first lesson", 100u8),
        ("\u{1f525}", "On a Roll", "Learn 5 days in a row", 100),
        ("\u{1f4da}", "Bookworm", "Finish 10 text lessons", 100),
        ("\u{1f393}", "Course Champion", "Complete a full course", 65),
        ("\u{2b50}", "Perfect Score", "Get 100% on a graded assignment", 92),
        ("\u{1f9d0}", "Quiz Master", "Pass 20 quizzes", 40),
    ];

    let earned = achievements.iter().filter(|(_, _, _, p)| *p >= 100).count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./achievements.css") }

        div { class: "achievements-page",
            PageHeader {
                PageTitle { "Achievements" }
            }

            p { class: "achievements-summary",
                "{earned} of {achievements.len()} unlocked"
            }

            div { class: "achievements-grid",
                for (emoji , title , description , progress) in achievements {
                    Card { key: "{title}",
                        CardContent {
                            div {
                                class: if progress >= 100 { "achievement earned" } else { "achievement" },
                                span { class: "achievement-emoji", "{emoji}" }
                                h3 { class: "achievement-title", "{title}" }
                                p { class: "achievement-description", "{description}" }
                                if progress < 100 {
                                    div { class: "achievement-progress",
                                        Progress {
                                            value: Some(progress as f64),
                                            ProgressIndicator {}
                                        }
                                        span { "{progress}%" }
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
