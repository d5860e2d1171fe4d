use dioxus::prelude::*;
use shared_types::{Role, User};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Card, CardContent, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Input,
    PageHeader, PageTitle, SearchBar,
};

use crate::auth::use_directory;

/// Full account listing with a role filter and name/email search.
#[component]
pub fn AdminUsersPage() -> Element {
    let directory = use_directory();
    let mut query = use_signal(String::new);
    let mut role_filter = use_signal(|| Option::<Role>::None);

    let needle = query().to_lowercase();
    let users: Vec<User> = directory
        .users()
        .iter()
        .filter(|u| role_filter().is_none_or(|r| u.role == r))
        .filter(|u| {
            needle.is_empty()
                || u.name.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Users" }
            }

            SearchBar {
                Input {
                    placeholder: "Search by name or email",
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
                select {
                    class: "admin-role-filter",
                    onchange: move |e: FormEvent| role_filter.set(Role::parse(&e.value())),
                    option { value: "", "All roles" }
                    option { value: "student", "Students" }
                    option { value: "tutor", "Tutors" }
                    option { value: "admin", "Admins" }
                }
            }

            Card {
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Name" }
                            DataTableColumn { "Email" }
                            DataTableColumn { "Role" }
                            DataTableColumn { "Courses" }
                        }
                        DataTableBody {
                            for user in users {
                                DataTableRow { key: "{user.id}",
                                    DataTableCell {
                                        div { class: "admin-user-cell",
                                            Avatar {
                                                if !user.avatar.is_empty() {
                                                    AvatarImage { src: user.avatar.clone() }
                                                }
                                                AvatarFallback { "{user.initials()}" }
                                            }
                                            span { "{user.name}" }
                                        }
                                    }
                                    DataTableCell { "{user.email}" }
                                    DataTableCell {
                                        Badge { variant: role_badge(user.role),
                                            "{user.role.display_name()}"
                                        }
                                    }
                                    DataTableCell {
                                        "{user.enrolled_courses.len() + user.taught_courses.len()}"
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

pub(super) fn role_badge(role: Role) -> BadgeVariant {
    match role {
        Role::Student => BadgeVariant::Secondary,
        Role::Tutor => BadgeVariant::Primary,
        Role::Admin => BadgeVariant::Destructive,
    }
}
