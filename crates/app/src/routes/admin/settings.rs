use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label, PageHeader,
    PageTitle, Separator, Switch, SwitchThumb,
};

/// Platform configuration toggles. Demo state only; values reset when the
/// page unmounts.
#[component]
pub fn AdminSettingsPage() -> Element {
    let mut platform_name = use_signal(|| "Skillora".to_string());
    let mut support_email = use_signal(|| "support@skillora.com".to_string());
    let mut open_registration = use_signal(|| true);
    let mut tutor_applications = use_signal(|| true);
    let mut maintenance_mode = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page admin-settings",
            PageHeader {
                PageTitle { "System Settings" }
            }

            Card {
                CardHeader {
                    CardTitle { "General" }
                }
                CardContent {
                    div { class: "admin-settings-field",
                        Label { html_for: "platform-name", "Platform name" }
                        Input {
                            id: "platform-name",
                            value: platform_name(),
                            on_input: move |e: FormEvent| platform_name.set(e.value()),
                        }
                    }
                    div { class: "admin-settings-field",
                        Label { html_for: "support-email", "Support email" }
                        Input {
                            input_type: "email",
                            id: "support-email",
                            value: support_email(),
                            on_input: move |e: FormEvent| support_email.set(e.value()),
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Access" }
                    CardDescription { "Who can join and publish" }
                }
                CardContent {
                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Open registration" }
                        Switch {
                            checked: Some(open_registration()),
                            on_checked_change: move |val: bool| open_registration.set(val),
                            SwitchThumb {}
                        }
                    }
                    Separator {}
                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Accept tutor applications" }
                        Switch {
                            checked: Some(tutor_applications()),
                            on_checked_change: move |val: bool| tutor_applications.set(val),
                            SwitchThumb {}
                        }
                    }
                    Separator {}
                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Maintenance mode" }
                        Switch {
                            checked: Some(maintenance_mode()),
                            on_checked_change: move |val: bool| maintenance_mode.set(val),
                            SwitchThumb {}
                        }
                    }
                }
            }
        }
    }
}
