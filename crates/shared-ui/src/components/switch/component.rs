use dioxus::prelude::*;

/// A toggle switch.
#[component]
pub fn Switch(
    #[props(default)] checked: bool,
    #[props(default)] on_checked_change: EventHandler<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            class: "switch",
            r#type: "button",
            role: "switch",
            "aria-checked": if checked { "true" } else { "false" },
            "data-state": if checked { "checked" } else { "unchecked" },
            onclick: move |_| on_checked_change.call(!checked),
            ..attributes,
            {children}
        }
    }
}

/// The sliding thumb inside a Switch.
#[component]
pub fn SwitchThumb(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    rsx! {
        span {
            class: "switch-thumb",
            ..attributes,
        }
    }
}
