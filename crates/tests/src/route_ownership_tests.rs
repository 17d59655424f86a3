use pretty_assertions::assert_eq;
use shared_types::{default_route, role_config, role_for_route, Role, ROLE_CONFIGS};

// ─── Prefix ownership ───────────────────────────────────────────────────────

#[test]
fn each_role_owns_its_whole_area() {
    for role in Role::ALL {
        let cfg = role_config(role);
        for item in cfg.nav_items {
            // Cross-role quick actions exist, but nav items stay in-area.
            assert_eq!(
                role_for_route(item.route),
                Some(role),
                "nav item {} of {:?} leaves the role's area",
                item.route,
                role
            );
        }
    }
}

#[test]
fn nested_paths_resolve_to_the_owning_role() {
    assert_eq!(role_for_route("/admin/users"), Some(Role::SystemAdmin));
    assert_eq!(role_for_route("/admin/users/42/edit"), Some(Role::SystemAdmin));
    assert_eq!(
        role_for_route("/inventory/receiving"),
        Some(Role::InventoryClerk)
    );
}

#[test]
fn unowned_paths_resolve_to_none() {
    assert_eq!(role_for_route("/unknown"), None);
    assert_eq!(role_for_route("/"), None);
    assert_eq!(role_for_route("/login"), None);
}

#[test]
fn registration_order_decides_overlapping_prefixes() {
    // "/super-admin" is registered before "/admin"; if the admin prefix
    // ever became a prefix of another area, the earlier entry must win.
    let first_match = ROLE_CONFIGS
        .iter()
        .find(|cfg| "/super-admin/admins".starts_with(cfg.route_prefix))
        .map(|cfg| cfg.role);
    assert_eq!(first_match, Some(Role::SuperAdmin));
    assert_eq!(role_for_route("/super-admin/admins"), first_match);
}

// ─── Default routes ─────────────────────────────────────────────────────────

#[test]
fn default_routes_are_distinct_per_role() {
    for (i, a) in Role::ALL.iter().enumerate() {
        for b in &Role::ALL[i + 1..] {
            assert_ne!(default_route(*a), default_route(*b));
        }
    }
}

#[test]
fn super_admin_lands_on_super_admin() {
    assert_eq!(default_route(Role::SuperAdmin), "/super-admin");
}
