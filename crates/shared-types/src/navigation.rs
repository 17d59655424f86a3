//! Role registry and navigation resolution.
//!
//! Static per-role navigation tables plus the pure functions the router
//! layer uses to turn "this user clicked this thing" into a concrete
//! route. Every function here is total: bad input resolves to a defined
//! fallback, never an error.

use crate::models::{Role, SessionUser};
use serde::{Deserialize, Serialize};

/// Generic landing route used when a role has no navigation items at all.
pub const FALLBACK_ROUTE: &str = "/login";

/// Closed set of navigation and quick-action identifiers.
///
/// UI buttons identify their target by one of these instead of a free
/// string, so a typo is a compile error rather than a silent fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ViewId {
    Dashboard,
    Admins,
    Users,
    Settings,
    Inventory,
    Staff,
    Reports,
    Sales,
    Stock,
    Receiving,
    AddAdmin,
    SystemReport,
    AddUser,
    AuditLog,
    NewSale,
    Restock,
}

impl ViewId {
    /// Parse a view id from its kebab-case form (untrusted string sources,
    /// e.g. data attributes). Unknown ids return `None`; callers that must
    /// always navigate go through [`navigate_by_id`] instead.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dashboard" => Some(ViewId::Dashboard),
            "admins" => Some(ViewId::Admins),
            "users" => Some(ViewId::Users),
            "settings" => Some(ViewId::Settings),
            "inventory" => Some(ViewId::Inventory),
            "staff" => Some(ViewId::Staff),
            "reports" => Some(ViewId::Reports),
            "sales" => Some(ViewId::Sales),
            "stock" => Some(ViewId::Stock),
            "receiving" => Some(ViewId::Receiving),
            "add-admin" => Some(ViewId::AddAdmin),
            "system-report" => Some(ViewId::SystemReport),
            "add-user" => Some(ViewId::AddUser),
            "audit-log" => Some(ViewId::AuditLog),
            "new-sale" => Some(ViewId::NewSale),
            "restock" => Some(ViewId::Restock),
            _ => None,
        }
    }

    /// Kebab-case form of this id.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Admins => "admins",
            ViewId::Users => "users",
            ViewId::Settings => "settings",
            ViewId::Inventory => "inventory",
            ViewId::Staff => "staff",
            ViewId::Reports => "reports",
            ViewId::Sales => "sales",
            ViewId::Stock => "stock",
            ViewId::Receiving => "receiving",
            ViewId::AddAdmin => "add-admin",
            ViewId::SystemReport => "system-report",
            ViewId::AddUser => "add-user",
            ViewId::AuditLog => "audit-log",
            ViewId::NewSale => "new-sale",
            ViewId::Restock => "restock",
        }
    }
}

/// A sidebar navigation entry for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: ViewId,
    pub label: &'static str,
    /// Icon key resolved to an actual glyph by the UI layer.
    pub icon: &'static str,
    pub route: &'static str,
}

/// A dashboard quick-action entry for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub id: ViewId,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
}

/// Static navigation bundle for one role: ordered nav items, ordered quick
/// actions (possibly empty), the default landing route, and the path prefix
/// this role owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleConfig {
    pub role: Role,
    pub route_prefix: &'static str,
    pub default_route: &'static str,
    pub nav_items: &'static [NavItem],
    pub quick_actions: &'static [QuickAction],
}

const SUPER_ADMIN: RoleConfig = RoleConfig {
    role: Role::SuperAdmin,
    route_prefix: "/super-admin",
    default_route: "/super-admin",
    nav_items: &[
        NavItem {
            id: ViewId::Dashboard,
            label: "Dashboard",
            icon: "layout-dashboard",
            route: "/super-admin",
        },
        NavItem {
            id: ViewId::Admins,
            label: "Admins",
            icon: "shield",
            route: "/super-admin/admins",
        },
        NavItem {
            id: ViewId::Reports,
            label: "Reports",
            icon: "file-text",
            route: "/super-admin/reports",
        },
        NavItem {
            id: ViewId::Settings,
            label: "Settings",
            icon: "settings",
            route: "/super-admin/settings",
        },
    ],
    quick_actions: &[
        QuickAction {
            id: ViewId::AddAdmin,
            label: "Add Admin",
            description: "Create a new system administrator",
            icon: "user-plus",
            route: "/super-admin/admins",
        },
        QuickAction {
            id: ViewId::SystemReport,
            label: "System Report",
            description: "Platform-wide activity summary",
            icon: "file-text",
            route: "/super-admin/reports",
        },
    ],
};

const SYSTEM_ADMIN: RoleConfig = RoleConfig {
    role: Role::SystemAdmin,
    route_prefix: "/admin",
    default_route: "/admin",
    nav_items: &[
        NavItem {
            id: ViewId::Dashboard,
            label: "Dashboard",
            icon: "layout-dashboard",
            route: "/admin",
        },
        NavItem {
            id: ViewId::Users,
            label: "Users",
            icon: "users",
            route: "/admin/users",
        },
        NavItem {
            id: ViewId::Settings,
            label: "Settings",
            icon: "settings",
            route: "/admin/settings",
        },
    ],
    quick_actions: &[
        QuickAction {
            id: ViewId::AddUser,
            label: "Add User",
            description: "Register a new console user",
            icon: "user-plus",
            route: "/admin/users",
        },
        QuickAction {
            id: ViewId::AuditLog,
            label: "Audit Log",
            description: "Review recent configuration changes",
            icon: "scroll-text",
            route: "/admin/settings",
        },
    ],
};

const MANAGER: RoleConfig = RoleConfig {
    role: Role::Manager,
    route_prefix: "/manager",
    default_route: "/manager",
    nav_items: &[
        NavItem {
            id: ViewId::Dashboard,
            label: "Dashboard",
            icon: "layout-dashboard",
            route: "/manager",
        },
        NavItem {
            id: ViewId::Inventory,
            label: "Inventory",
            icon: "package",
            route: "/manager/inventory",
        },
        NavItem {
            id: ViewId::Staff,
            label: "Staff",
            icon: "users",
            route: "/manager/staff",
        },
        NavItem {
            id: ViewId::Reports,
            label: "Reports",
            icon: "file-text",
            route: "/manager/reports",
        },
    ],
    quick_actions: &[
        QuickAction {
            id: ViewId::NewSale,
            label: "New Sale",
            description: "Open the point-of-sale screen",
            icon: "shopping-cart",
            route: "/cashier/sales",
        },
        QuickAction {
            id: ViewId::Restock,
            label: "Restock",
            description: "Jump to inventory management",
            icon: "package-plus",
            route: "/manager/inventory",
        },
    ],
};

const CASHIER: RoleConfig = RoleConfig {
    role: Role::Cashier,
    route_prefix: "/cashier",
    default_route: "/cashier",
    nav_items: &[
        NavItem {
            id: ViewId::Dashboard,
            label: "Dashboard",
            icon: "layout-dashboard",
            route: "/cashier",
        },
        NavItem {
            id: ViewId::Sales,
            label: "Sales",
            icon: "shopping-cart",
            route: "/cashier/sales",
        },
    ],
    quick_actions: &[QuickAction {
        id: ViewId::NewSale,
        label: "New Sale",
        description: "Ring up a customer",
        icon: "shopping-cart",
        route: "/cashier/sales",
    }],
};

const INVENTORY_CLERK: RoleConfig = RoleConfig {
    role: Role::InventoryClerk,
    route_prefix: "/inventory",
    default_route: "/inventory",
    nav_items: &[
        NavItem {
            id: ViewId::Dashboard,
            label: "Dashboard",
            icon: "layout-dashboard",
            route: "/inventory",
        },
        NavItem {
            id: ViewId::Stock,
            label: "Stock",
            icon: "package",
            route: "/inventory/stock",
        },
        NavItem {
            id: ViewId::Receiving,
            label: "Receiving",
            icon: "truck",
            route: "/inventory/receiving",
        },
    ],
    quick_actions: &[QuickAction {
        id: ViewId::Restock,
        label: "Restock",
        description: "Adjust stock levels",
        icon: "package-plus",
        route: "/inventory/stock",
    }],
};

/// All role configs in registration order. Route-ownership matching walks
/// this slice front to back; first matching prefix wins when one prefix is
/// a prefix of another.
pub const ROLE_CONFIGS: [&RoleConfig; 5] = [
    &SUPER_ADMIN,
    &SYSTEM_ADMIN,
    &MANAGER,
    &CASHIER,
    &INVENTORY_CLERK,
];

/// Look up the static config for a role. Total over the `Role` enum.
pub const fn role_config(role: Role) -> &'static RoleConfig {
    match role {
        Role::SuperAdmin => &SUPER_ADMIN,
        Role::SystemAdmin => &SYSTEM_ADMIN,
        Role::Manager => &MANAGER,
        Role::Cashier => &CASHIER,
        Role::InventoryClerk => &INVENTORY_CLERK,
    }
}

/// Ordered sidebar entries for a role.
pub const fn nav_items(role: Role) -> &'static [NavItem] {
    role_config(role).nav_items
}

/// Ordered quick actions for a role. May be empty.
pub const fn quick_actions(role: Role) -> &'static [QuickAction] {
    role_config(role).quick_actions
}

/// The role's default landing route.
pub const fn default_route(role: Role) -> &'static str {
    role_config(role).default_route
}

/// Which role owns a path, by prefix match in registration order.
/// Returns `None` for paths outside every role's area (login, unknown).
pub fn role_for_route(pathname: &str) -> Option<Role> {
    ROLE_CONFIGS
        .iter()
        .find(|cfg| pathname.starts_with(cfg.route_prefix))
        .map(|cfg| cfg.role)
}

/// How a [`RouteDecision`] was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSource {
    /// The view id matched one of the role's nav items.
    NavItem,
    /// The view id matched one of the role's quick actions.
    QuickAction,
    /// No match; the role's default route was used.
    Fallback,
}

/// The outcome of a navigation request. `source` exposes whether the id
/// actually matched, so tests can tell a hit from a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDecision {
    pub route: &'static str,
    pub source: RouteSource,
}

/// Resolve a view id against a role's navigation sets.
///
/// Three-tier resolution, first match wins: nav items, then quick actions,
/// then the role's default (its first nav item's route, or the generic
/// fallback for a role with no nav items). Always succeeds.
pub fn navigate(view: ViewId, role: Role) -> RouteDecision {
    let cfg = role_config(role);

    if let Some(item) = cfg.nav_items.iter().find(|item| item.id == view) {
        return RouteDecision {
            route: item.route,
            source: RouteSource::NavItem,
        };
    }
    if let Some(action) = cfg.quick_actions.iter().find(|action| action.id == view) {
        return RouteDecision {
            route: action.route,
            source: RouteSource::QuickAction,
        };
    }
    RouteDecision {
        route: cfg
            .nav_items
            .first()
            .map(|item| item.route)
            .unwrap_or(FALLBACK_ROUTE),
        source: RouteSource::Fallback,
    }
}

/// String-keyed variant of [`navigate`] for untrusted id sources.
/// An unparseable id resolves like any other non-match: the role's
/// default route with `RouteSource::Fallback`.
pub fn navigate_by_id(id: &str, role: Role) -> RouteDecision {
    match ViewId::parse(id) {
        Some(view) => navigate(view, role),
        None => RouteDecision {
            route: role_config(role)
                .nav_items
                .first()
                .map(|item| item.route)
                .unwrap_or(FALLBACK_ROUTE),
            source: RouteSource::Fallback,
        },
    }
}

/// Result of evaluating the session against the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// No session user; go to the login page.
    RedirectToLogin,
    /// Authenticated with no explicit destination; go to the role's home.
    Redirect(&'static str),
    /// Authenticated and the current path belongs to the user's role.
    Render,
    /// Authenticated but the current path is owned by another role or by
    /// no role at all.
    Unauthorized,
}

/// Session bootstrap: decide what to do for the current session and path.
///
/// Runs on initial load and again whenever the session store signals a
/// change, so a logout elsewhere re-routes instead of trusting a stale
/// role.
pub fn bootstrap(user: Option<&SessionUser>, current_path: Option<&str>) -> BootstrapOutcome {
    let Some(user) = user else {
        return BootstrapOutcome::RedirectToLogin;
    };
    let role = user.resolved_role();

    match current_path {
        None => BootstrapOutcome::Redirect(default_route(role)),
        Some(path) => {
            if role_for_route(path) == Some(role) {
                BootstrapOutcome::Render
            } else {
                BootstrapOutcome::Unauthorized
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(role: &str) -> SessionUser {
        SessionUser {
            id: 1,
            email: "user@trade-matrix.test".into(),
            name: "Test User".into(),
            role: role.into(),
            logged_in_at: None,
        }
    }

    #[test]
    fn every_role_has_a_config_with_owned_default_route() {
        for role in Role::ALL {
            let cfg = role_config(role);
            assert!(!cfg.default_route.is_empty());
            assert_eq!(role_for_route(cfg.default_route), Some(role));
        }
    }

    #[test]
    fn registry_lookup_is_idempotent() {
        for role in Role::ALL {
            assert_eq!(role_config(role), role_config(role));
        }
    }

    #[test]
    fn default_route_is_first_nav_item_route() {
        for role in Role::ALL {
            let cfg = role_config(role);
            assert_eq!(Some(cfg.default_route), cfg.nav_items.first().map(|n| n.route));
        }
    }

    #[test]
    fn route_ownership_prefix_match() {
        assert_eq!(role_for_route("/admin/users"), Some(Role::SystemAdmin));
        assert_eq!(role_for_route("/super-admin/reports"), Some(Role::SuperAdmin));
        assert_eq!(role_for_route("/manager/inventory"), Some(Role::Manager));
        assert_eq!(role_for_route("/unknown"), None);
        assert_eq!(role_for_route("/login"), None);
    }

    #[test]
    fn super_admin_prefix_wins_over_admin() {
        // "/super-admin" registers before "/admin" and does not share its
        // prefix, so both resolve independently.
        assert_eq!(role_for_route("/super-admin"), Some(Role::SuperAdmin));
        assert_eq!(role_for_route("/admin"), Some(Role::SystemAdmin));
    }

    #[test]
    fn navigate_nav_item_match() {
        let decision = navigate(ViewId::Inventory, Role::Manager);
        assert_eq!(decision.route, "/manager/inventory");
        assert_eq!(decision.source, RouteSource::NavItem);
    }

    #[test]
    fn navigate_quick_action_match() {
        // NewSale is not in Manager's nav set, only its quick actions.
        let decision = navigate(ViewId::NewSale, Role::Manager);
        assert_eq!(decision.route, "/cashier/sales");
        assert_eq!(decision.source, RouteSource::QuickAction);
    }

    #[test]
    fn navigate_nav_item_shadows_quick_action() {
        // Cashier has Sales as a nav item and NewSale as a quick action
        // pointing at the same route; a nav-item id resolves as NavItem.
        let decision = navigate(ViewId::Sales, Role::Cashier);
        assert_eq!(decision.route, "/cashier/sales");
        assert_eq!(decision.source, RouteSource::NavItem);
    }

    #[test]
    fn navigate_no_match_falls_back_to_default() {
        let decision = navigate(ViewId::Receiving, Role::Manager);
        assert_eq!(decision.route, "/manager");
        assert_eq!(decision.source, RouteSource::Fallback);
    }

    #[test]
    fn navigate_by_id_parses_known_ids() {
        let decision = navigate_by_id("inventory", Role::Manager);
        assert_eq!(decision.route, "/manager/inventory");
        assert_eq!(decision.source, RouteSource::NavItem);
    }

    #[test]
    fn navigate_by_id_unknown_is_observable_fallback() {
        let decision = navigate_by_id("does-not-exist", Role::Manager);
        assert_eq!(decision.route, "/manager");
        assert_eq!(decision.source, RouteSource::Fallback);
    }

    #[test]
    fn view_id_parse_roundtrip() {
        for id in [
            ViewId::Dashboard,
            ViewId::Admins,
            ViewId::Users,
            ViewId::Settings,
            ViewId::Inventory,
            ViewId::Staff,
            ViewId::Reports,
            ViewId::Sales,
            ViewId::Stock,
            ViewId::Receiving,
            ViewId::AddAdmin,
            ViewId::SystemReport,
            ViewId::AddUser,
            ViewId::AuditLog,
            ViewId::NewSale,
            ViewId::Restock,
        ] {
            assert_eq!(ViewId::parse(id.as_str()), Some(id));
        }
        assert_eq!(ViewId::parse("not-a-view"), None);
    }

    #[test]
    fn bootstrap_without_user_redirects_to_login() {
        assert_eq!(bootstrap(None, None), BootstrapOutcome::RedirectToLogin);
        assert_eq!(
            bootstrap(None, Some("/manager")),
            BootstrapOutcome::RedirectToLogin
        );
    }

    #[test]
    fn bootstrap_routes_to_role_home() {
        assert_eq!(
            bootstrap(Some(&user("SuperAdmin")), None),
            BootstrapOutcome::Redirect("/super-admin")
        );
        assert_eq!(
            bootstrap(Some(&user("Cashier")), None),
            BootstrapOutcome::Redirect("/cashier")
        );
    }

    #[test]
    fn bootstrap_renders_owned_routes() {
        assert_eq!(
            bootstrap(Some(&user("Manager")), Some("/manager/staff")),
            BootstrapOutcome::Render
        );
    }

    #[test]
    fn bootstrap_rejects_foreign_and_unknown_routes() {
        assert_eq!(
            bootstrap(Some(&user("Cashier")), Some("/admin/users")),
            BootstrapOutcome::Unauthorized
        );
        assert_eq!(
            bootstrap(Some(&user("Cashier")), Some("/nowhere")),
            BootstrapOutcome::Unauthorized
        );
    }

    #[test]
    fn bootstrap_unknown_role_lands_on_manager_home() {
        assert_eq!(
            bootstrap(Some(&user("Auditor")), None),
            BootstrapOutcome::Redirect("/manager")
        );
    }
}
