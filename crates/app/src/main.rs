use dioxus::prelude::*;
use shared_types::{AppConfig, FeatureFlags};

mod auth;
mod components;
mod routes;

use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Feature flags baked in from `config.toml`. A missing or malformed file
/// disables every optional surface.
fn load_flags() -> FeatureFlags {
    match toml::from_str::<AppConfig>(include_str!("../config.toml")) {
        Ok(config) => config.features,
        Err(err) => {
            tracing::warn!("config.toml unreadable, all features off: {err}");
            FeatureFlags::default()
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(load_flags);
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        Router::<Route> {}
    }
}
