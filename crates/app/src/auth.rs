use dioxus::prelude::*;
use shared_types::{Role, SessionUser};

/// Global authentication state.
///
/// Backed by a signal, so every component reading the session re-renders
/// when it changes — the reactive form of the session-change subscription.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Resolve the current user's role.
///
/// Unknown role strings fall back to Manager inside the resolver; an
/// absent session resolves the same way, but callers behind the auth
/// guard never observe that case.
pub fn use_user_role() -> Role {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding
        .as_ref()
        .map(SessionUser::resolved_role)
        .unwrap_or_default()
}
