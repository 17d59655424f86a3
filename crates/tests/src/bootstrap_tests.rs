use pretty_assertions::assert_eq;
use shared_types::{bootstrap, default_route, BootstrapOutcome, Role, SessionUser};

fn user(role: &str) -> SessionUser {
    SessionUser {
        id: 3,
        email: "staff@trade-matrix.test".to_string(),
        name: "Staff Member".to_string(),
        role: role.to_string(),
        logged_in_at: None,
    }
}

// ─── Unauthenticated ────────────────────────────────────────────────────────

#[test]
fn no_session_always_goes_to_login() {
    assert_eq!(bootstrap(None, None), BootstrapOutcome::RedirectToLogin);
    assert_eq!(
        bootstrap(None, Some("/super-admin")),
        BootstrapOutcome::RedirectToLogin
    );
    assert_eq!(
        bootstrap(None, Some("/nowhere")),
        BootstrapOutcome::RedirectToLogin
    );
}

// ─── Authenticated, no destination ──────────────────────────────────────────

#[test]
fn every_role_redirects_to_its_own_home() {
    for role in Role::ALL {
        let session = user(role.as_str());
        assert_eq!(
            bootstrap(Some(&session), None),
            BootstrapOutcome::Redirect(default_route(role))
        );
    }
}

#[test]
fn unknown_role_redirects_to_manager_home() {
    assert_eq!(
        bootstrap(Some(&user("Auditor")), None),
        BootstrapOutcome::Redirect("/manager")
    );
}

// ─── Authenticated, explicit destination ────────────────────────────────────

#[test]
fn own_area_renders() {
    assert_eq!(
        bootstrap(Some(&user("SystemAdmin")), Some("/admin/users")),
        BootstrapOutcome::Render
    );
    assert_eq!(
        bootstrap(Some(&user("InventoryClerk")), Some("/inventory/stock")),
        BootstrapOutcome::Render
    );
}

#[test]
fn foreign_area_is_unauthorized() {
    assert_eq!(
        bootstrap(Some(&user("Cashier")), Some("/manager/reports")),
        BootstrapOutcome::Unauthorized
    );
    assert_eq!(
        bootstrap(Some(&user("Manager")), Some("/super-admin")),
        BootstrapOutcome::Unauthorized
    );
}

#[test]
fn unowned_path_is_unauthorized_not_an_error() {
    assert_eq!(
        bootstrap(Some(&user("Manager")), Some("/does-not-exist")),
        BootstrapOutcome::Unauthorized
    );
}

#[test]
fn bootstrap_is_pure_over_repeated_calls() {
    let session = user("Cashier");
    let first = bootstrap(Some(&session), Some("/cashier/sales"));
    for _ in 0..3 {
        assert_eq!(bootstrap(Some(&session), Some("/cashier/sales")), first);
    }
}
