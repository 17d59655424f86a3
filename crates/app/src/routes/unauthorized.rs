use dioxus::prelude::*;
use shared_types::default_route;

use crate::auth::{use_auth, use_user_role};
use crate::routes::push_path;

/// Shown when a signed-in user lands on a path outside their role's area.
/// Rendered in place (no redirect), so the address bar keeps the attempted
/// path and a reload re-evaluates access.
#[component]
pub fn Unauthorized() -> Element {
    let auth = use_auth();
    let role = use_user_role();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_default();
    let home = default_route(role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./unauthorized.css") }

        div { class: "unauthorized-page",
            div { class: "unauthorized-card",
                div { class: "unauthorized-code", "403" }
                h1 { class: "unauthorized-title", "Access Denied" }
                p { class: "unauthorized-message",
                    "{name}, your role ({role.display_name()}) does not have access to this page."
                }
                button {
                    class: "unauthorized-link",
                    onclick: move |_| push_path(home),
                    "Go to your dashboard"
                }
            }
        }
    }
}
