use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Card, CardContent};

/// A headline number with a label, used on every dashboard.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] variant: BadgeVariant) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-card-row",
                    span { class: "stat-card-value", "{value}" }
                    Badge { variant: variant, "{label}" }
                }
            }
        }
    }
}
