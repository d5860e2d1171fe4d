use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle,
};

use crate::auth::use_directory;
use crate::routes::Route;

/// Catalog listing for administrators.
#[component]
pub fn AdminCoursesPage() -> Element {
    let directory = use_directory();
    let courses: Vec<_> = directory.courses().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Courses" }
            }

            Card {
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Title" }
                            DataTableColumn { "Instructor" }
                            DataTableColumn { "Category" }
                            DataTableColumn { "Level" }
                            DataTableColumn { "Students" }
                            DataTableColumn { "Rating" }
                            DataTableColumn { "Price" }
                        }
                        DataTableBody {
                            for course in courses {
                                DataTableRow {
                                    key: "{course.id}",
                                    onclick: {
                                        let course_id = course.id.clone();
                                        move |_| {
                                            navigator().push(Route::CourseDetail {
                                                course_id: course_id.clone(),
                                            });
                                        }
                                    },
                                    DataTableCell { "{course.title}" }
                                    DataTableCell { "{course.instructor}" }
                                    DataTableCell {
                                        Badge { variant: BadgeVariant::Outline, "{course.category}" }
                                    }
                                    DataTableCell { "{course.level.as_str()}" }
                                    DataTableCell { "{course.students}" }
                                    DataTableCell { "\u{2b50} {course.rating}" }
                                    DataTableCell { "${course.price}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
