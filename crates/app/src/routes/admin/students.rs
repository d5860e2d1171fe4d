use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle,
};

use crate::auth::use_directory;

/// Student roster with enrollment counts.
#[component]
pub fn AdminStudentsPage() -> Element {
    let directory = use_directory();
    let students: Vec<_> = directory
        .users_by_role(Role::Student)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Students" }
            }

            Card {
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Student" }
                            DataTableColumn { "Email" }
                            DataTableColumn { "Enrollments" }
                        }
                        DataTableBody {
                            for student in students {
                                DataTableRow { key: "{student.id}",
                                    DataTableCell {
                                        div { class: "admin-user-cell",
                                            Avatar {
                                                if !student.avatar.is_empty() {
                                                    AvatarImage { src: student.avatar.clone() }
                                                }
                                                AvatarFallback { "{student.initials()}" }
                                            }
                                            span { "{student.name}" }
                                        }
                                    }
                                    DataTableCell { "{student.email}" }
                                    DataTableCell {
                                        {student
                                            .enrolled_courses
                                            .iter()
                                            .filter_map(|id| directory.course(id))
                                            .map(|c| c.title.as_str())
                                            .collect::<Vec<_>>()
                                            .join(", ")}
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
