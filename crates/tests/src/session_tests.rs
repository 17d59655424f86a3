use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use shared_types::{
    authenticate, bootstrap, AppErrorKind, BootstrapOutcome, LoginRequest, Role, SessionStore,
    DEMO_ACCOUNTS,
};

fn request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

// ─── Credential checks ──────────────────────────────────────────────────────

#[test]
fn every_demo_account_can_sign_in() {
    for account in DEMO_ACCOUNTS {
        let user = authenticate(&request(account.email, account.password))
            .unwrap_or_else(|e| panic!("{} should sign in: {e}", account.email));
        assert_eq!(user.role, account.role);
        assert!(user.logged_in_at.is_some());
    }
}

#[test]
fn demo_accounts_cover_every_role() {
    for role in Role::ALL {
        assert!(
            DEMO_ACCOUNTS.iter().any(|a| a.role == role.as_str()),
            "no demo account for {:?}",
            role
        );
    }
}

#[test]
fn wrong_password_is_unauthorized() {
    let err = authenticate(&request("manager@trade-matrix.test", "wrong-password")).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(err.field_errors.is_empty());
}

#[test]
fn malformed_input_reports_field_errors() {
    // This crate enables the `validation` feature, so these messages come
    // from the derive on LoginRequest rather than hand-written checks.
    let err = authenticate(&request("not-an-email", "short")).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("email").map(String::as_str),
        Some("Valid email is required")
    );
    assert_eq!(
        err.field_errors.get("password").map(String::as_str),
        Some("Password must be at least 8 characters")
    );
}

// ─── Store subscriptions ────────────────────────────────────────────────────

#[test]
fn login_then_logout_notifies_subscribers_in_order() {
    let mut store = SessionStore::new();
    let seen: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    store.subscribe(move |user| sink.borrow_mut().push(user.is_some()));

    store
        .login(&request("cashier@trade-matrix.test", "cashier111"))
        .expect("demo login");
    assert_eq!(store.current_user().map(|u| u.role.as_str()), Some("Cashier"));

    store.logout();
    assert!(store.current_user().is_none());

    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn failed_login_does_not_notify() {
    let mut store = SessionStore::new();
    let fired = Rc::new(RefCell::new(0u32));

    let sink = Rc::clone(&fired);
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    assert!(store.login(&request("cashier@trade-matrix.test", "wrongwrong")).is_err());
    assert_eq!(*fired.borrow(), 0);
    assert!(store.current_user().is_none());
}

#[test]
fn logout_without_session_still_notifies() {
    // Fire-and-forget: signing out never depends on having a session.
    let mut store = SessionStore::new();
    let fired = Rc::new(RefCell::new(0u32));

    let sink = Rc::clone(&fired);
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    store.logout();
    assert_eq!(*fired.borrow(), 1);
}

// ─── Cross-tab logout ───────────────────────────────────────────────────────

#[test]
fn external_clear_drives_bootstrap_back_to_login() {
    let mut store = SessionStore::new();
    let outcome: Rc<RefCell<Option<BootstrapOutcome>>> = Rc::new(RefCell::new(None));

    // Subscriber mirrors what the route guard does on each session change.
    let sink = Rc::clone(&outcome);
    store.subscribe(move |user| {
        *sink.borrow_mut() = Some(bootstrap(user, Some("/manager/inventory")));
    });

    store
        .login(&request("manager@trade-matrix.test", "manager111"))
        .expect("demo login");
    assert_eq!(*outcome.borrow(), Some(BootstrapOutcome::Render));

    // Another tab cleared the session out from under us.
    store.clear_external();
    assert_eq!(*outcome.borrow(), Some(BootstrapOutcome::RedirectToLogin));
}
