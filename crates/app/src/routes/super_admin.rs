use dioxus::prelude::*;
use shared_types::{FeatureFlags, Role, SALES_SUMMARY};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageTitle, Switch,
};

use crate::components::{QuickActionsCard, StatCard};

struct AdminRow {
    name: &'static str,
    email: &'static str,
    scope: &'static str,
}

const ADMINS: &[AdminRow] = &[
    AdminRow {
        name: "Owen Brandt",
        email: "sysadmin@trade-matrix.test",
        scope: "All tenants",
    },
    AdminRow {
        name: "Priya Nair",
        email: "priya.nair@trade-matrix.test",
        scope: "EU region",
    },
    AdminRow {
        name: "Marcus Webb",
        email: "marcus.webb@trade-matrix.test",
        scope: "US region",
    },
];

/// Platform-wide overview for the SuperAdmin.
#[component]
pub fn SuperAdminDashboardPage() -> Element {
    let flags: FeatureFlags = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Platform Overview" }
        }

        div { class: "stats-grid",
            StatCard {
                label: "Tenants",
                value: "34",
                variant: BadgeVariant::Primary,
            }
            StatCard {
                label: "System Admins",
                value: "{ADMINS.len()}",
                variant: BadgeVariant::Secondary,
            }
            StatCard {
                label: "Open Incidents",
                value: "2",
                variant: BadgeVariant::Destructive,
            }
        }

        QuickActionsCard { role: Role::SuperAdmin }

        if flags.analytics {
            Card {
                CardHeader {
                    CardTitle { "Sales Snapshot" }
                    CardDescription { "Aggregated across all tenants, trailing 30 days" }
                }
                CardContent {
                    div { class: "summary-row",
                        div { class: "summary-cell",
                            span { class: "summary-label", "Transactions" }
                            span { class: "summary-value", "{SALES_SUMMARY.transactions}" }
                        }
                        div { class: "summary-cell",
                            span { class: "summary-label", "Revenue" }
                            span { class: "summary-value", "${SALES_SUMMARY.today_total:.2}" }
                        }
                        div { class: "summary-cell",
                            span { class: "summary-label", "Avg Ticket" }
                            span { class: "summary-value", "${SALES_SUMMARY.avg_ticket:.2}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminsPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "System Admins" }
        }
        Card {
            CardContent {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Scope" }
                        }
                    }
                    tbody {
                        for row in ADMINS {
                            tr { key: "{row.email}",
                                td { {row.name} }
                                td { {row.email} }
                                td {
                                    Badge { variant: BadgeVariant::Outline, {row.scope} }
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
pub fn ReportsPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "System Reports" }
        }
        Card {
            CardHeader {
                CardTitle { "Scheduled Reports" }
                CardDescription { "Generated nightly, retained for 90 days" }
            }
            CardContent {
                ul { class: "alert-list",
                    li { class: "alert-list-row",
                        span { "Tenant usage digest" }
                        Badge { variant: BadgeVariant::Secondary, "daily" }
                    }
                    li { class: "alert-list-row",
                        span { "Revenue rollup" }
                        Badge { variant: BadgeVariant::Secondary, "weekly" }
                    }
                    li { class: "alert-list-row",
                        span { "Audit archive" }
                        Badge { variant: BadgeVariant::Secondary, "monthly" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SettingsPage() -> Element {
    let mut maintenance = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Platform Settings" }
        }
        Card {
            CardHeader {
                CardTitle { "Maintenance" }
                CardDescription { "Puts every tenant console into read-only mode" }
            }
            CardContent {
                div { class: "setting-row",
                    span { "Maintenance mode" }
                    Switch {
                        checked: maintenance(),
                        on_checked_change: move |on| maintenance.set(on),
                    }
                }
            }
        }
    }
}
