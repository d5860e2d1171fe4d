use dioxus::prelude::*;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    Label, PageHeader, PageTitle, Textarea,
};
use tracing::info;

use crate::routes::Route;

/// Course creation form. The catalog is read-only, so submitting only
/// assigns a local draft id and shows a confirmation. Nothing is stored.
#[component]
pub fn CreateCoursePage() -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut created_draft = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft_id = uuid::Uuid::new_v4().to_string();
        info!(draft_id = %draft_id, title = %title(), "course draft created");
        created_draft.set(Some(draft_id));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tutor.css") }

        div { class: "tutor-page",
            PageHeader {
                PageTitle { "Create Course" }
            }

            if let Some(draft_id) = created_draft() {
                Card {
                    CardHeader {
                        CardTitle { "Draft saved" }
                        CardDescription { "Draft {draft_id} exists for this session only." }
                    }
                    CardContent {
                        p { class: "tutor-empty",
                            "Publishing is disabled in the demo environment, so the course "
                            "will not appear in the catalog."
                        }
                        Link { to: Route::TutorCourses {}, "Back to my courses" }
                    }
                }
            } else {
                Card {
                    CardHeader {
                        CardTitle { "Course details" }
                        CardDescription { "Describe what students will learn" }
                    }
                    CardContent {
                        form { onsubmit: handle_submit,
                            div { class: "tutor-field",
                                Label { html_for: "course-title", "Title" }
                                Input {
                                    id: "course-title",
                                    placeholder: "e.g. Advanced TypeScript Patterns",
                                    value: title(),
                                    on_input: move |e: FormEvent| title.set(e.value()),
                                }
                            }
                            div { class: "tutor-field",
                                Label { html_for: "course-description", "Description" }
                                Textarea {
                                    id: "course-description",
                                    placeholder: "What will students build and learn?",
                                    value: description(),
                                    on_input: move |e: FormEvent| description.set(e.value()),
                                }
                            }
                            div { class: "tutor-field-row",
                                div { class: "tutor-field",
                                    Label { html_for: "course-category", "Category" }
                                    Input {
                                        id: "course-category",
                                        placeholder: "Programming",
                                        value: category(),
                                        on_input: move |e: FormEvent| category.set(e.value()),
                                    }
                                }
                                div { class: "tutor-field",
                                    Label { html_for: "course-price", "Price (USD)" }
                                    Input {
                                        id: "course-price",
                                        placeholder: "49.99",
                                        value: price(),
                                        on_input: move |e: FormEvent| price.set(e.value()),
                                    }
                                }
                            }
                            Button { variant: ButtonVariant::Primary, "Save Draft" }
                        }
                    }
                }
            }
        }
    }
}
