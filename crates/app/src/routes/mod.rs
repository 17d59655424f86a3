pub mod cashier;
pub mod inventory;
pub mod login;
pub mod manager;
pub mod not_found;
pub mod super_admin;
pub mod system_admin;
pub mod unauthorized;

use crate::auth::{use_auth, use_user_role};
use crate::components::nav_icon;
use dioxus::prelude::*;
use shared_types::{bootstrap, nav_items, BootstrapOutcome, Role};
use shared_ui::{
    Avatar, Badge, BadgeVariant, Button, ButtonVariant, Navbar, Separator, Sidebar, SidebarContent,
    SidebarFooter, SidebarGroup, SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger, Switch,
    SwitchThumb,
};

use login::Login;
use not_found::NotFound;
use unauthorized::Unauthorized;

/// Application routes. Guarded routes sit under the auth guard and the
/// app layout; everything else renders bare.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    // ── Super Admin ──
    #[route("/super-admin")]
    SuperAdminDashboard {},
    #[route("/super-admin/admins")]
    SuperAdminAdmins {},
    #[route("/super-admin/reports")]
    SuperAdminReports {},
    #[route("/super-admin/settings")]
    SuperAdminSettings {},
    // ── System Admin ──
    #[route("/admin")]
    SystemAdminDashboard {},
    #[route("/admin/users")]
    SystemAdminUsers {},
    #[route("/admin/settings")]
    SystemAdminSettings {},
    // ── Manager ──
    #[route("/manager")]
    ManagerDashboard {},
    #[route("/manager/inventory")]
    ManagerInventory {},
    #[route("/manager/staff")]
    ManagerStaff {},
    #[route("/manager/reports")]
    ManagerReports {},
    // ── Cashier ──
    #[route("/cashier")]
    CashierDashboard {},
    #[route("/cashier/sales")]
    CashierSales {},
    // ── Inventory Clerk ──
    #[route("/inventory")]
    InventoryDashboard {},
    #[route("/inventory/stock")]
    InventoryStock {},
    #[route("/inventory/receiving")]
    InventoryReceiving {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Push a registry route path onto the history.
pub fn push_path(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(_) => {
            navigator().push(Route::NotFound { route: vec![] });
        }
    }
}

/// Replace the current history entry with a registry route path. Used for
/// startup redirects so Back does not land on an unauthenticated state.
pub fn replace_path(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().replace(route);
        }
        Err(_) => {
            navigator().replace(Route::NotFound { route: vec![] });
        }
    }
}

/// Session bootstrap for the bare `/` entry point: no explicit
/// destination, so authenticated users land on their role's home.
#[component]
fn Home() -> Element {
    let auth = use_auth();
    let user = auth.current_user.read().clone();

    match bootstrap(user.as_ref(), None) {
        BootstrapOutcome::RedirectToLogin => {
            navigator().replace(Route::Login {});
        }
        BootstrapOutcome::Redirect(path) => {
            replace_path(path);
        }
        // Unreachable without an explicit destination.
        BootstrapOutcome::Render | BootstrapOutcome::Unauthorized => {}
    }

    rsx! {
        div { class: "auth-guard-loading",
            p { "Loading..." }
        }
    }
}

/// Auth guard layout — redirects to /login when unauthenticated and
/// renders the Unauthorized view when the current path is outside the
/// resolved role's area. Reading the session signal here means any
/// session change re-runs the guard instead of trusting a stale role.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let path = route.to_string();
    let user = auth.current_user.read().clone();

    match bootstrap(user.as_ref(), Some(&path)) {
        BootstrapOutcome::Render => rsx! { Outlet::<Route> {} },
        BootstrapOutcome::RedirectToLogin => {
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        // Redirect only occurs without an explicit destination; a guarded
        // route always has one, so anything else is a foreign path.
        BootstrapOutcome::Unauthorized | BootstrapOutcome::Redirect(_) => {
            rsx! { Unauthorized {} }
        }
    }
}

/// Main app layout with sidebar and top navbar. The sidebar is rendered
/// straight from the role registry, so it never shows an item the
/// current role does not own.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let role = use_user_role();
    let current_path = route.to_string();

    let mut theme_state = use_context_provider(|| shared_ui::theme::ThemeState {
        family: Signal::new("matrix".to_string()),
        is_dark: Signal::new(true),
    });

    let display_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Guest".to_string());

    let page_title = match &route {
        Route::SuperAdminDashboard {}
        | Route::SystemAdminDashboard {}
        | Route::ManagerDashboard {}
        | Route::CashierDashboard {}
        | Route::InventoryDashboard {} => "Dashboard",
        Route::SuperAdminAdmins {} => "Admins",
        Route::SuperAdminReports {} | Route::ManagerReports {} => "Reports",
        Route::SuperAdminSettings {} | Route::SystemAdminSettings {} => "Settings",
        Route::SystemAdminUsers {} => "Users",
        Route::ManagerInventory {} => "Inventory",
        Route::ManagerStaff {} => "Staff",
        Route::CashierSales {} => "Sales",
        Route::InventoryStock {} => "Stock",
        Route::InventoryReceiving {} => "Receiving",
        Route::Home {} | Route::Login {} | Route::NotFound { .. } => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div {
                        class: "sidebar-brand",
                        span {
                            class: "sidebar-brand-name",
                            "TradeMatrix"
                        }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupLabel { {role.display_name()} }
                        SidebarMenu {
                            for item in nav_items(role) {
                                SidebarMenuItem { key: "{item.route}",
                                    SidebarMenuButton {
                                        active: current_path == item.route,
                                        onclick: move |_| push_path(item.route),
                                        {nav_icon(item.icon)}
                                        {item.label}
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    RoleBadge {}
                    div {
                        class: "sidebar-footer-row",
                        span {
                            class: "sidebar-footer-label",
                            "Dark Mode"
                        }
                        Switch {
                            checked: (theme_state.is_dark)(),
                            on_checked_change: move |checked: bool| {
                                theme_state.is_dark.set(checked);
                                theme_state.apply();
                            },
                            SwitchThumb {}
                        }
                    }
                }
            }

            SidebarInset {
                // Top navbar
                Navbar {
                    div {
                        class: "navbar-bar",

                        SidebarTrigger {
                            span { class: "navbar-trigger-icon", "\u{2630}" }
                        }

                        Separator { horizontal: false }

                        span {
                            class: "navbar-title",
                            "{page_title}"
                        }

                        div { class: "navbar-spacer" }

                        Avatar { name: display_name.clone() }
                        span { class: "navbar-user-name", "{display_name}" }

                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                // Fire-and-forget: the accessor owns any cleanup;
                                // the console routes to login regardless.
                                tracing::info!("user signed out");
                                auth.clear_auth();
                                navigator().push(Route::Login {});
                            },
                            "Sign Out"
                        }
                    }
                }

                // Page content
                div {
                    class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Displays the current user's role as a badge in the sidebar footer.
#[component]
fn RoleBadge() -> Element {
    let role = use_user_role();

    let variant = match role {
        Role::SuperAdmin => BadgeVariant::Destructive,
        Role::SystemAdmin => BadgeVariant::Primary,
        Role::Manager => BadgeVariant::Secondary,
        Role::Cashier | Role::InventoryClerk => BadgeVariant::Outline,
    };

    rsx! {
        div { class: "sidebar-footer-row sidebar-role-row",
            span { class: "sidebar-footer-label", "Role" }
            Badge { variant: variant, {role.display_name()} }
        }
    }
}

// Role area route components

#[component]
fn SuperAdminDashboard() -> Element {
    super_admin::SuperAdminDashboardPage()
}

#[component]
fn SuperAdminAdmins() -> Element {
    super_admin::AdminsPage()
}

#[component]
fn SuperAdminReports() -> Element {
    super_admin::ReportsPage()
}

#[component]
fn SuperAdminSettings() -> Element {
    super_admin::SettingsPage()
}

#[component]
fn SystemAdminDashboard() -> Element {
    system_admin::SystemAdminDashboardPage()
}

#[component]
fn SystemAdminUsers() -> Element {
    system_admin::UsersPage()
}

#[component]
fn SystemAdminSettings() -> Element {
    system_admin::SettingsPage()
}

#[component]
fn ManagerDashboard() -> Element {
    manager::ManagerDashboardPage()
}

#[component]
fn ManagerInventory() -> Element {
    manager::InventoryPage()
}

#[component]
fn ManagerStaff() -> Element {
    manager::StaffPage()
}

#[component]
fn ManagerReports() -> Element {
    manager::ReportsPage()
}

#[component]
fn CashierDashboard() -> Element {
    cashier::CashierDashboardPage()
}

#[component]
fn CashierSales() -> Element {
    cashier::SalesPage()
}

#[component]
fn InventoryDashboard() -> Element {
    inventory::InventoryDashboardPage()
}

#[component]
fn InventoryStock() -> Element {
    inventory::StockPage()
}

#[component]
fn InventoryReceiving() -> Element {
    inventory::ReceivingPage()
}
