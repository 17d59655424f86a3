use crate::routes::push_path;
use dioxus::prelude::*;
use shared_types::{navigate, quick_actions, Role, RouteSource};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

use super::nav_icon;

/// Quick actions for the current role, dispatched through the navigation
/// resolver rather than hardcoded routes.
#[component]
pub fn QuickActionsCard(role: Role) -> Element {
    let actions = quick_actions(role);
    if actions.is_empty() {
        return rsx! {};
    }

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Quick Actions" }
            }
            CardContent {
                div { class: "quick-actions-grid",
                    for action in actions {
                        Button {
                            key: "{action.route}",
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| {
                                let decision = navigate(action.id, role);
                                if decision.source == RouteSource::Fallback {
                                    tracing::warn!(
                                        "quick action {} fell back to {}",
                                        action.id.as_str(),
                                        decision.route
                                    );
                                }
                                push_path(decision.route);
                            },
                            {nav_icon(action.icon)}
                            div { class: "quick-action-text",
                                span { class: "quick-action-label", {action.label} }
                                span { class: "quick-action-description", {action.description} }
                            }
                        }
                    }
                }
            }
        }
    }
}
