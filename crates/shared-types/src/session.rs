//! Mock auth session accessor.
//!
//! Stands in for the external authentication backend: a static demo
//! credential table, a current-user slot, and an explicit change
//! subscription so callers re-run session bootstrap instead of trusting
//! a cached role. The UI layer mirrors the same contract through its
//! reactive state; this store is the headless version.

use crate::error::AppError;
use crate::models::{LoginRequest, SessionUser};

/// A demo credential row. The console ships with mock data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

/// One demo account per role.
pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "root@trade-matrix.test",
        password: "superadmin1",
        name: "Riya Kapoor",
        role: "SuperAdmin",
    },
    DemoAccount {
        email: "sysadmin@trade-matrix.test",
        password: "sysadmin11",
        name: "Owen Brandt",
        role: "SystemAdmin",
    },
    DemoAccount {
        email: "manager@trade-matrix.test",
        password: "manager111",
        name: "Leah Okafor",
        role: "Manager",
    },
    DemoAccount {
        email: "cashier@trade-matrix.test",
        password: "cashier111",
        name: "Tomás Vega",
        role: "Cashier",
    },
    DemoAccount {
        email: "clerk@trade-matrix.test",
        password: "inventory1",
        name: "June Park",
        role: "InventoryClerk",
    },
];

/// Check credentials against the demo table.
///
/// Validation failures come back as field errors; a non-matching pair as
/// `Unauthorized`. Successful logins carry a login timestamp.
pub fn authenticate(request: &LoginRequest) -> Result<SessionUser, AppError> {
    validate_request(request)?;

    DEMO_ACCOUNTS
        .iter()
        .position(|acct| acct.email == request.email && acct.password == request.password)
        .map(|idx| {
            let acct = &DEMO_ACCOUNTS[idx];
            SessionUser {
                id: idx as i64 + 1,
                email: acct.email.to_string(),
                name: acct.name.to_string(),
                role: acct.role.to_string(),
                logged_in_at: Some(chrono::Utc::now()),
            }
        })
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))
}

/// Derive-based validation; messages come from the `LoginRequest` derive.
#[cfg(feature = "validation")]
fn validate_request(request: &LoginRequest) -> Result<(), AppError> {
    use validator::Validate;
    request.validate().map_err(AppError::from)
}

/// Spelled-out equivalent of the `LoginRequest` derive rules, for builds
/// without the `validation` feature.
#[cfg(not(feature = "validation"))]
fn validate_request(request: &LoginRequest) -> Result<(), AppError> {
    let mut field_errors = std::collections::HashMap::new();
    if request.email.is_empty() || !request.email.contains('@') {
        field_errors.insert("email".to_string(), "Valid email is required".to_string());
    }
    if request.password.len() < 8 {
        field_errors.insert(
            "password".to_string(),
            "Password must be at least 8 characters".to_string(),
        );
    }
    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Validation failed", field_errors))
    }
}

type SessionCallback = Box<dyn Fn(Option<&SessionUser>)>;

/// In-process session store with explicit change subscriptions.
///
/// Login, logout, and out-of-band clears (another tab logging out) all
/// fire every registered callback with the new session state.
#[derive(Default)]
pub struct SessionStore {
    current: Option<SessionUser>,
    subscribers: Vec<SessionCallback>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session user, if any.
    pub fn current_user(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    /// Authenticate and install the session. Subscribers fire on success.
    pub fn login(&mut self, request: &LoginRequest) -> Result<SessionUser, AppError> {
        let user = authenticate(request)?;
        self.current = Some(user.clone());
        self.notify();
        Ok(user)
    }

    /// Invalidate the session. Always succeeds; subscribers fire even if
    /// there was no session, matching the fire-and-forget logout contract.
    pub fn logout(&mut self) {
        self.current = None;
        self.notify();
    }

    /// Register a callback invoked whenever session state may have changed.
    pub fn subscribe(&mut self, callback: impl Fn(Option<&SessionUser>) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Signal an out-of-band session change (e.g. storage cleared by
    /// another tab). Drops the session and fires subscribers.
    pub fn clear_external(&mut self) {
        self.current = None;
        self.notify();
    }

    fn notify(&self) {
        for callback in &self.subscribers {
            callback(self.current.as_ref());
        }
    }
}
