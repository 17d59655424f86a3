use serde::{Deserialize, Serialize};

/// Console user role controlling navigation and route ownership.
///
/// - `SuperAdmin` — owns platform administration, manages other admins.
/// - `SystemAdmin` — manages users and system settings.
/// - `Manager` — store operations: inventory, staff, reports.
/// - `Cashier` — point-of-sale screens only.
/// - `InventoryClerk` — stock and receiving screens only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Role {
    SuperAdmin,
    SystemAdmin,
    #[default]
    Manager,
    Cashier,
    InventoryClerk,
}

impl Role {
    /// All roles in registration order. Route-ownership prefix matching
    /// walks this list front to back, so order is load-bearing.
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::SystemAdmin,
        Role::Manager,
        Role::Cashier,
        Role::InventoryClerk,
    ];

    /// Parse the `role` string carried on a session user.
    ///
    /// Match is case-sensitive and exact. Anything else — unknown names,
    /// empty strings, garbled input — falls back to `Manager` so the
    /// navigation layer always has a role to render for.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "SuperAdmin" => Role::SuperAdmin,
            "SystemAdmin" => Role::SystemAdmin,
            "Manager" => Role::Manager,
            "Cashier" => Role::Cashier,
            "InventoryClerk" => Role::InventoryClerk,
            _ => Role::Manager,
        }
    }

    /// Canonical string as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SuperAdmin",
            Role::SystemAdmin => "SystemAdmin",
            Role::Manager => "Manager",
            Role::Cashier => "Cashier",
            Role::InventoryClerk => "InventoryClerk",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::SystemAdmin => "System Admin",
            Role::Manager => "Manager",
            Role::Cashier => "Cashier",
            Role::InventoryClerk => "Inventory Clerk",
        }
    }
}

/// Authenticated user info (safe to send to client).
///
/// Owned by the auth backend; the console only ever reads `role` to
/// resolve a [`Role`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl SessionUser {
    /// Resolve this user's role string into a canonical [`Role`].
    pub fn resolved_role(&self) -> Role {
        Role::from_str_or_default(&self.role)
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}
