use dioxus::prelude::*;

/// Top navigation bar container.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            class: "navbar",
            ..attributes,
            {children}
        }
    }
}
