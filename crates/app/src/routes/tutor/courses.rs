use dioxus::prelude::*;
use shared_types::Course;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    PageHeader, PageTitle, PageActions,
};

use crate::auth::{use_auth, use_directory};
use crate::routes::Route;

/// Courses taught by the current tutor.
#[component]
pub fn TutorCoursesPage() -> Element {
    let auth = use_auth();
    let directory = use_directory();

    let instructor_id = auth.current_user().map(|u| u.id).unwrap_or_default();
    let courses: Vec<Course> = directory
        .courses_by_instructor(&instructor_id)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tutor.css") }

        div { class: "tutor-page",
            PageHeader {
                PageTitle { "My Courses" }
                PageActions {
                    Link { to: Route::CreateCourse {},
                        Button { variant: ButtonVariant::Primary, "New Course" }
                    }
                }
            }

            if courses.is_empty() {
                p { class: "tutor-empty",
                    "You have no published courses yet. Create your first one to get started."
                }
            } else {
                CourseSummaryTable { courses: courses }
            }
        }
    }
}

/// Course table shared between the tutor dashboard and the courses page.
#[component]
pub fn CourseSummaryTable(courses: Vec<Course>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Published Courses" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Title" }
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
