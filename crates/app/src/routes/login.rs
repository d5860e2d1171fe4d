use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input, Label, Separator,
};

use crate::auth::use_auth;
use crate::routes::Route;
use platform::DEMO_CREDENTIALS;

/// Login page with email/password and a role selector.
///
/// Credentials are checked against the fixed demo triples. A successful
/// login replaces whatever identity was active, so this page also works as
/// a role switcher while signed in.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);

        if auth.login(&email(), &password(), role()) {
            navigator().push(Route::Dashboard {});
        } else {
            error_msg.set(Some(
                "Invalid credentials for the selected role.".to_string(),
            ));
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Welcome to Skillora" }
                    CardDescription { "Sign in to continue learning" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@skillora.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "role", "Sign in as" }
                            select {
                                class: "auth-role-select",
                                id: "role",
                                value: role().as_str(),
                                onchange: move |e: FormEvent| {
                                    if let Some(selected) = Role::parse(&e.value()) {
                                        role.set(selected);
                                    }
                                },
                                option { value: "student", "Student" }
                                option { value: "tutor", "Tutor" }
                                option { value: "admin", "Admin" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            "Sign In"
                        }
                    }

                    div { class: "auth-divider",
                        Separator {}
                        span { class: "auth-divider-text", "demo accounts" }
                        Separator {}
                    }

                    div { class: "auth-demo-list",
                        for (demo_email , _ , demo_role) in DEMO_CREDENTIALS {
                            button {
                                r#type: "button",
                                class: "auth-demo-row",
                                onclick: move |_| {
                                    email.set(demo_email.to_string());
                                    password.set("password".to_string());
                                    role.set(*demo_role);
                                },
                                Badge { variant: demo_badge(*demo_role), "{demo_role.display_name()}" }
                                span { class: "auth-demo-email", "{demo_email}" }
                            }
                        }
                        p { class: "auth-demo-hint", "Password for all demo accounts: password" }
                    }
                }

                CardFooter {
                    p { class: "auth-link", "Skillora demo environment. No account needed." }
                }
            }
        }
    }
}

fn demo_badge(role: Role) -> BadgeVariant {
    match role {
        Role::Student => BadgeVariant::Secondary,
        Role::Tutor => BadgeVariant::Primary,
        Role::Admin => BadgeVariant::Destructive,
    }
}
