use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle,
};

use crate::auth::use_directory;

/// Subscription overview. Plans are fixed demo data tied to real
/// directory accounts; there is no billing backend.
#[component]
pub fn AdminSubscriptionsPage() -> Element {
    let directory = use_directory();

    let subscriptions = [
        ("user-1", "Pro Learner", "$19/mo", true),
        ("user-2", "Tutor Plus", "$29/mo", true),
        ("user-3", "Tutor Plus", "$29/mo", false),
        ("user-4", "Free", "$0/mo", true),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Subscriptions" }
            }

            Card {
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Account" }
                            DataTableColumn { "Plan" }
                            DataTableColumn { "Price" }
                            DataTableColumn { "Status" }
                        }
                        DataTableBody {
                            for (user_id , plan , price , active) in subscriptions {
                                if let Some(user) = directory.user(user_id) {
                                    DataTableRow { key: "{user_id}",
                                        DataTableCell { "{user.name}" }
                                        DataTableCell { "{plan}" }
                                        DataTableCell { "{price}" }
                                        DataTableCell {
                                            if active {
                                                Badge { variant: BadgeVariant::Primary, "Active" }
                                            } else {
                                                Badge { variant: BadgeVariant::Destructive, "Past due" }
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
}
