use dioxus::prelude::*;
use shared_types::{Role, SALES_SUMMARY};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageTitle,
};

use crate::components::{QuickActionsCard, StatCard};

struct SaleRow {
    receipt: &'static str,
    items: u32,
    total: &'static str,
    paid_with: &'static str,
}

const RECENT_SALES: &[SaleRow] = &[
    SaleRow {
        receipt: "R-10492",
        items: 3,
        total: "$42.15",
        paid_with: "Card",
    },
    SaleRow {
        receipt: "R-10491",
        items: 1,
        total: "$8.99",
        paid_with: "Cash",
    },
    SaleRow {
        receipt: "R-10490",
        items: 7,
        total: "$103.40",
        paid_with: "Card",
    },
];

#[component]
pub fn CashierDashboardPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Register" }
        }

        div { class: "stats-grid",
            StatCard {
                label: "Transactions",
                value: "{SALES_SUMMARY.transactions}",
                variant: BadgeVariant::Primary,
            }
            StatCard {
                label: "Today's Total",
                value: "${SALES_SUMMARY.today_total:.2}",
                variant: BadgeVariant::Secondary,
            }
            StatCard {
                label: "Avg Ticket",
                value: "${SALES_SUMMARY.avg_ticket:.2}",
                variant: BadgeVariant::Outline,
            }
        }

        QuickActionsCard { role: Role::Cashier }
    }
}

#[component]
pub fn SalesPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Sales" }
        }
        Card {
            CardHeader {
                CardTitle { "Recent Receipts" }
                CardDescription { "This register, current shift" }
            }
            CardContent {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Receipt" }
                            th { "Items" }
                            th { "Total" }
                            th { "Payment" }
                        }
                    }
                    tbody {
                        for row in RECENT_SALES {
                            tr { key: "{row.receipt}",
                                td { {row.receipt} }
                                td { "{row.items}" }
                                td { {row.total} }
                                td {
                                    Badge { variant: BadgeVariant::Outline, {row.paid_with} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
