use pretty_assertions::assert_eq;
use shared_types::{Role, SessionUser};

fn user_with_role(role: &str) -> SessionUser {
    SessionUser {
        id: 7,
        email: "someone@trade-matrix.test".to_string(),
        name: "Someone".to_string(),
        role: role.to_string(),
        logged_in_at: None,
    }
}

// ─── Role parsing ───────────────────────────────────────────────────────────

#[test]
fn known_role_strings_resolve_exactly() {
    assert_eq!(Role::from_str_or_default("SuperAdmin"), Role::SuperAdmin);
    assert_eq!(Role::from_str_or_default("SystemAdmin"), Role::SystemAdmin);
    assert_eq!(Role::from_str_or_default("Manager"), Role::Manager);
    assert_eq!(Role::from_str_or_default("Cashier"), Role::Cashier);
    assert_eq!(
        Role::from_str_or_default("InventoryClerk"),
        Role::InventoryClerk
    );
}

#[test]
fn unknown_role_string_falls_back_to_manager() {
    assert_eq!(Role::from_str_or_default("Auditor"), Role::Manager);
    assert_eq!(Role::from_str_or_default(""), Role::Manager);
}

#[test]
fn role_matching_is_case_sensitive() {
    // Stored roles are canonical PascalCase; anything else is unknown.
    assert_eq!(Role::from_str_or_default("superadmin"), Role::Manager);
    assert_eq!(Role::from_str_or_default("CASHIER"), Role::Manager);
    assert_eq!(Role::from_str_or_default(" Cashier"), Role::Manager);
}

// ─── Session user resolution ────────────────────────────────────────────────

#[test]
fn session_user_resolves_stored_role() {
    assert_eq!(
        user_with_role("InventoryClerk").resolved_role(),
        Role::InventoryClerk
    );
}

#[test]
fn session_user_with_retired_role_acts_as_manager() {
    // A role removed from the registry must not lock the account out.
    assert_eq!(user_with_role("Auditor").resolved_role(), Role::Manager);
}

#[test]
fn session_user_survives_json_roundtrip() {
    let original = user_with_role("Cashier");
    let json = serde_json::to_string(&original).expect("serialize");
    let restored: SessionUser = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, original);
    assert_eq!(restored.resolved_role(), Role::Cashier);
}
