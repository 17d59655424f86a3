use dioxus::prelude::*;
use shared_types::default_route;

use crate::auth::use_auth;
use crate::routes::{push_path, Route};

/// 404 page. The home link depends on whether the visitor is signed in.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let path = format!("/{}", route.join("/"));
    let home = auth
        .current_user
        .read()
        .as_ref()
        .map(|user| default_route(user.resolved_role()));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                if let Some(home) = home {
                    button {
                        class: "not-found-link",
                        onclick: move |_| push_path(home),
                        "Back to Dashboard"
                    }
                } else {
                    Link { to: Route::Login {},
                        class: "not-found-link",
                        "Go to Sign In"
                    }
                }
            }
        }
    }
}
