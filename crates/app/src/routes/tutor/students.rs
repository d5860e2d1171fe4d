use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle,
};

use crate::auth::{use_auth, use_directory};

/// Students enrolled in at least one of the current tutor's courses.
#[component]
pub fn TutorStudentsPage() -> Element {
    let auth = use_auth();
    let directory = use_directory();

    let instructor_id = auth.current_user().map(|u| u.id).unwrap_or_default();
    let course_ids: Vec<String> = directory
        .courses_by_instructor(&instructor_id)
        .iter()
        .map(|c| c.id.clone())
        .collect();

    let students: Vec<_> = directory
        .users_by_role(Role::Student)
        .into_iter()
        .filter(|s| s.enrolled_courses.iter().any(|id| course_ids.contains(id)))
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tutor.css") }

        div { class: "tutor-page",
            PageHeader {
                PageTitle { "Students" }
            }

            if students.is_empty() {
                p { class: "tutor-empty", "No students are enrolled in your courses yet." }
            } else {
                Card {
                    CardContent {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Student" }
                                DataTableColumn { "Email" }
                                DataTableColumn { "Your courses they take" }
                            }
                            DataTableBody {
                                for student in students {
                                    DataTableRow { key: "{student.id}",
                                        DataTableCell {
                                            div { class: "tutor-student-cell",
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
                                                .filter(|id| course_ids.contains(id))
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
}
