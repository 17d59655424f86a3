use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageTitle, Switch,
};

use crate::components::{QuickActionsCard, StatCard};

struct UserRow {
    name: &'static str,
    email: &'static str,
    role: Role,
    active: bool,
}

const USERS: &[UserRow] = &[
    UserRow {
        name: "Leah Okafor",
        email: "manager@trade-matrix.test",
        role: Role::Manager,
        active: true,
    },
    UserRow {
        name: "Tomás Vega",
        email: "cashier@trade-matrix.test",
        role: Role::Cashier,
        active: true,
    },
    UserRow {
        name: "June Park",
        email: "clerk@trade-matrix.test",
        role: Role::InventoryClerk,
        active: true,
    },
    UserRow {
        name: "Dana Holt",
        email: "dana.holt@trade-matrix.test",
        role: Role::Cashier,
        active: false,
    },
];

#[component]
pub fn SystemAdminDashboardPage() -> Element {
    let active = USERS.iter().filter(|u| u.active).count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Administration" }
        }

        div { class: "stats-grid",
            StatCard {
                label: "Users",
                value: "{USERS.len()}",
                variant: BadgeVariant::Primary,
            }
            StatCard {
                label: "Active",
                value: "{active}",
                variant: BadgeVariant::Secondary,
            }
            StatCard {
                label: "Roles",
                value: "{Role::ALL.len()}",
                variant: BadgeVariant::Outline,
            }
        }

        QuickActionsCard { role: Role::SystemAdmin }
    }
}

#[component]
pub fn UsersPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Users" }
        }
        Card {
            CardContent {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for row in USERS {
                            tr { key: "{row.email}",
                                td { {row.name} }
                                td { {row.email} }
                                td {
                                    Badge { variant: BadgeVariant::Outline,
                                        {row.role.display_name()}
                                    }
                                }
                                td {
                                    if row.active {
                                        Badge { variant: BadgeVariant::Secondary, "Active" }
                                    } else {
                                        Badge { variant: BadgeVariant::Destructive, "Suspended" }
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
pub fn SettingsPage() -> Element {
    let mut signups_open = use_signal(|| true);
    let mut audit_verbose = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Admin Settings" }
        }
        Card {
            CardHeader {
                CardTitle { "Account Policy" }
                CardDescription { "Applies to new staff accounts in this tenant" }
            }
            CardContent {
                div { class: "setting-row",
                    span { "Allow self-service signups" }
                    Switch {
                        checked: signups_open(),
                        on_checked_change: move |on| signups_open.set(on),
                    }
                }
                div { class: "setting-row",
                    span { "Verbose audit logging" }
                    Switch {
                        checked: audit_verbose(),
                        on_checked_change: move |on| audit_verbose.set(on),
                    }
                }
            }
        }
    }
}
