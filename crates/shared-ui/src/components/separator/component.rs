use dioxus::prelude::*;

/// Visual separator line.
#[component]
pub fn Separator(
    #[props(default = true)] horizontal: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        hr {
            class: "separator",
            "data-orientation": if horizontal { "horizontal" } else { "vertical" },
            ..attributes,
        }
    }
}
