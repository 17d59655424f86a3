use dioxus::prelude::*;
use shared_types::{
    low_stock, navigate, FeatureFlags, Role, ViewId, REVENUE_BY_MONTH, SALES_BY_CATEGORY,
    STOCK_LEVELS,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, PageActions, PageHeader, PageTitle,
};

use crate::components::{QuickActionsCard, StatCard};
use crate::routes::push_path;

/// Manager dashboard: revenue trend, category mix, and low-stock alerts.
#[component]
pub fn ManagerDashboardPage() -> Element {
    let flags: FeatureFlags = use_context();
    let alerts = low_stock();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Store Overview" }
        }

        div { class: "stats-grid",
            StatCard {
                label: "Revenue (Aug)",
                value: "$59,300",
                variant: BadgeVariant::Primary,
            }
            StatCard {
                label: "Low Stock",
                value: "{alerts.len()}",
                variant: BadgeVariant::Destructive,
            }
            StatCard {
                label: "Staff On Shift",
                value: "12",
                variant: BadgeVariant::Secondary,
            }
        }

        QuickActionsCard { role: Role::Manager }

        if flags.analytics {
            div { class: "widgets-grid",
                RevenueWidget {}
                CategoryWidget {}
            }

            Card {
                CardHeader {
                    CardTitle { "Low Stock Alerts" }
                    CardDescription { "Lines at or below their reorder point" }
                }
                CardContent {
                    ul { class: "alert-list",
                        for line in alerts {
                            li { key: "{line.sku}", class: "alert-list-row",
                                span { class: "alert-sku", {line.sku} }
                                span { {line.name} }
                                Badge { variant: BadgeVariant::Destructive,
                                    "{line.on_hand} left"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Monthly revenue rendered as labelled bars (no chart library).
#[component]
fn RevenueWidget() -> Element {
    let max = REVENUE_BY_MONTH
        .iter()
        .map(|p| p.revenue)
        .fold(f64::MIN, f64::max);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Revenue by Month" }
            }
            CardContent {
                div { class: "bar-rows",
                    for point in REVENUE_BY_MONTH {
                        div { key: "{point.month}", class: "bar-row",
                            span { class: "bar-label", {point.month} }
                            div {
                                class: "bar-fill",
                                style: "width: {point.revenue / max * 100.0}%",
                            }
                            span { class: "bar-value", "${point.revenue:.0}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryWidget() -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Units by Category" }
            }
            CardContent {
                ul { class: "alert-list",
                    for line in SALES_BY_CATEGORY {
                        li { key: "{line.category}", class: "alert-list-row",
                            span { {line.category} }
                            Badge { variant: BadgeVariant::Secondary, "{line.units}" }
                        }
                    }
                }
            }
        }
    }
}

/// Full stock table for the manager's inventory view.
#[component]
pub fn InventoryPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Inventory" }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        push_path(navigate(ViewId::Restock, Role::Manager).route);
                    },
                    "Restock"
                }
            }
        }
        Card {
            CardContent {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "SKU" }
                            th { "Item" }
                            th { "On Hand" }
                            th { "Reorder At" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for line in STOCK_LEVELS {
                            tr { key: "{line.sku}",
                                td { {line.sku} }
                                td { {line.name} }
                                td { "{line.on_hand}" }
                                td { "{line.reorder_at}" }
                                td {
                                    if line.needs_reorder() {
                                        Badge { variant: BadgeVariant::Destructive, "Reorder" }
                                    } else {
                                        Badge { variant: BadgeVariant::Secondary, "OK" }
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

#[component]
pub fn StaffPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Staff" }
        }
        Card {
            CardHeader {
                CardTitle { "Team Roster" }
                CardDescription { "Scheduling and roster management" }
            }
            CardContent {
                p { class: "placeholder-copy",
                    "Shift assignments for the current week will appear here."
                }
            }
        }
    }
}

#[component]
pub fn ReportsPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Reports" }
        }
        div { class: "widgets-grid",
            RevenueWidget {}
            CategoryWidget {}
        }
    }
}
