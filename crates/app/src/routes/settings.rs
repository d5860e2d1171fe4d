use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label, PageHeader,
    PageTitle, Separator, Switch, SwitchThumb, Textarea,
};

use crate::ProfileState;

/// Settings page: profile fields and appearance toggles.
///
/// Edits live in local signals only. There is no persistence layer, so
/// navigating away resets the form to the directory values.
#[component]
pub fn Settings() -> Element {
    let profile: ProfileState = use_context();
    let mut theme_state: shared_ui::theme::ThemeState = use_context();

    let mut name = use_signal(|| profile.display_name.read().clone());
    let mut email = use_signal(|| profile.email.read().clone());
    let mut bio = use_signal(String::new);
    let mut email_notifications = use_signal(|| true);
    let mut assignment_reminders = use_signal(|| true);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "settings-page",
            PageHeader {
                PageTitle { "Settings" }
            }

            Card {
                CardHeader {
                    CardTitle { "Profile" }
                    CardDescription { "How you appear to other learners and tutors" }
                }
                CardContent {
                    div { class: "settings-field",
                        Label { html_for: "settings-name", "Display name" }
                        Input {
                            id: "settings-name",
                            value: name(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                    }
                    div { class: "settings-field",
                        Label { html_for: "settings-email", "Email" }
                        Input {
                            input_type: "email",
                            id: "settings-email",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                    }
                    div { class: "settings-field",
                        Label { html_for: "settings-bio", "Bio" }
                        Textarea {
                            id: "settings-bio",
                            placeholder: "Tell others a little about yourself",
                            value: bio(),
                            on_input: move |e: FormEvent| bio.set(e.value()),
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Appearance" }
                }
                CardContent {
                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Dark mode" }
                        Switch {
                            checked: Some((theme_state.is_dark)()),
                            on_checked_change: move |val: bool| {
                                theme_state.is_dark.set(val);
                                theme_state.apply();
                            },
                            SwitchThumb {}
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Notifications" }
                    CardDescription { "Demo toggles, nothing is sent" }
                }
                CardContent {
                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Email notifications" }
                        Switch {
                            checked: Some(email_notifications()),
                            on_checked_change: move |val: bool| email_notifications.set(val),
                            SwitchThumb {}
                        }
                    }
                    Separator {}
                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Assignment reminders" }
                        Switch {
                            checked: Some(assignment_reminders()),
                            on_checked_change: move |val: bool| assignment_reminders.set(val),
                            SwitchThumb {}
                        }
                    }
                }
            }
        }
    }
}
