use dioxus::prelude::*;
use shared_types::{low_stock, Role, STOCK_LEVELS};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageTitle,
};

use crate::components::{QuickActionsCard, StatCard};

struct Delivery {
    reference: &'static str,
    supplier: &'static str,
    lines: u32,
    status: &'static str,
}

const INBOUND: &[Delivery] = &[
    Delivery {
        reference: "PO-2207",
        supplier: "Northline Foods",
        lines: 14,
        status: "In transit",
    },
    Delivery {
        reference: "PO-2206",
        supplier: "Vega Wholesale",
        lines: 6,
        status: "Receiving",
    },
    Delivery {
        reference: "PO-2205",
        supplier: "Cartwright Paper",
        lines: 9,
        status: "Received",
    },
];

#[component]
pub fn InventoryDashboardPage() -> Element {
    let alerts = low_stock();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Stock Room" }
        }

        div { class: "stats-grid",
            StatCard {
                label: "Tracked SKUs",
                value: "{STOCK_LEVELS.len()}",
                variant: BadgeVariant::Primary,
            }
            StatCard {
                label: "Below Reorder",
                value: "{alerts.len()}",
                variant: BadgeVariant::Destructive,
            }
            StatCard {
                label: "Inbound POs",
                value: "{INBOUND.len()}",
                variant: BadgeVariant::Secondary,
            }
        }

        QuickActionsCard { role: Role::InventoryClerk }
    }
}

#[component]
pub fn StockPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Stock" }
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
pub fn ReceivingPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            PageTitle { "Receiving" }
        }
        Card {
            CardHeader {
                CardTitle { "Inbound Purchase Orders" }
                CardDescription { "Deliveries expected this week" }
            }
            CardContent {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Reference" }
                            th { "Supplier" }
                            th { "Lines" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for order in INBOUND {
                            tr { key: "{order.reference}",
                                td { {order.reference} }
                                td { {order.supplier} }
                                td { "{order.lines}" }
                                td {
                                    Badge { variant: BadgeVariant::Outline, {order.status} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
