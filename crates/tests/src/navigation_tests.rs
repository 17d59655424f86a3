use pretty_assertions::assert_eq;
use shared_types::{
    nav_items, navigate, navigate_by_id, quick_actions, Role, RouteSource, ViewId,
};

// ─── Three-tier resolution ──────────────────────────────────────────────────

#[test]
fn nav_item_ids_resolve_for_every_role() {
    for role in Role::ALL {
        for item in nav_items(role) {
            let decision = navigate(item.id, role);
            assert_eq!(decision.route, item.route);
            assert_eq!(decision.source, RouteSource::NavItem);
        }
    }
}

#[test]
fn quick_action_only_ids_resolve_as_quick_actions() {
    for role in Role::ALL {
        let nav_ids: Vec<ViewId> = nav_items(role).iter().map(|item| item.id).collect();
        for action in quick_actions(role) {
            if nav_ids.contains(&action.id) {
                continue;
            }
            let decision = navigate(action.id, role);
            assert_eq!(decision.route, action.route);
            assert_eq!(decision.source, RouteSource::QuickAction);
        }
    }
}

#[test]
fn manager_new_sale_crosses_into_cashier_area() {
    let decision = navigate(ViewId::NewSale, Role::Manager);
    assert_eq!(decision.route, "/cashier/sales");
    assert_eq!(decision.source, RouteSource::QuickAction);
}

#[test]
fn foreign_view_id_falls_back_without_error() {
    // AuditLog belongs to SystemAdmin; for a Cashier it must resolve to
    // the Cashier home and report that nothing matched.
    let decision = navigate(ViewId::AuditLog, Role::Cashier);
    assert_eq!(decision.route, "/cashier");
    assert_eq!(decision.source, RouteSource::Fallback);
}

#[test]
fn fallback_route_equals_first_nav_item() {
    for role in Role::ALL {
        let decision = navigate(ViewId::SystemReport, role);
        if decision.source == RouteSource::Fallback {
            assert_eq!(
                Some(decision.route),
                nav_items(role).first().map(|item| item.route)
            );
        }
    }
}

// ─── String dispatch ────────────────────────────────────────────────────────

#[test]
fn string_ids_resolve_like_enum_ids() {
    for role in Role::ALL {
        for item in nav_items(role) {
            assert_eq!(navigate_by_id(item.id.as_str(), role), navigate(item.id, role));
        }
    }
}

#[test]
fn garbage_string_id_is_a_visible_fallback() {
    let decision = navigate_by_id("open-the-pod-bay-doors", Role::InventoryClerk);
    assert_eq!(decision.route, "/inventory");
    assert_eq!(decision.source, RouteSource::Fallback);
}
