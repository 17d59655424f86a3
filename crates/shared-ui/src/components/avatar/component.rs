use dioxus::prelude::*;

/// Circular avatar rendering a user's initials.
#[component]
pub fn Avatar(
    name: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let initials: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "avatar",
            ..attributes,
            "{initials}"
        }
    }
}
