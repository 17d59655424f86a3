use crate::auth::use_auth;
use crate::routes::replace_path;
use dioxus::prelude::*;
use shared_types::{authenticate, default_route, FeatureFlags, LoginRequest, DEMO_ACCOUNTS};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label, Separator,
};
use std::collections::HashMap;

/// Email/password sign-in against the demo account table. A successful login
/// stores the user in [`AuthState`](crate::auth::AuthState) and replaces the
/// current entry with the role's home route, so Back does not return here.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    // Already signed in: go straight to the role's home.
    if let Some(user) = auth.current_user.read().as_ref() {
        replace_path(default_route(user.resolved_role()));
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = LoginRequest {
            email: email(),
            password: password(),
        };
        match authenticate(&request) {
            Ok(user) => {
                let home = default_route(user.resolved_role());
                tracing::info!(email = %user.email, role = %user.role, "signed in");
                auth.set_user(user);
                replace_path(home);
            }
            Err(e) => {
                if e.field_errors.is_empty() {
                    error_msg.set(Some(e.message));
                } else {
                    field_errors.set(e.field_errors);
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "TradeMatrix" }
                    CardDescription { "Sign in to your workspace" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@trade-matrix.test",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            "Sign In"
                        }
                    }

                    if flags.demo_hint {
                        div { class: "auth-divider",
                            Separator {}
                            span { class: "auth-divider-text", "demo accounts" }
                            Separator {}
                        }
                        ul { class: "auth-demo-list",
                            for account in DEMO_ACCOUNTS {
                                li {
                                    key: "{account.email}",
                                    class: "auth-demo-row",
                                    onclick: move |_| {
                                        email.set(account.email.to_string());
                                        password.set(account.password.to_string());
                                    },
                                    span { class: "auth-demo-role", {account.role} }
                                    span { class: "auth-demo-email", {account.email} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
