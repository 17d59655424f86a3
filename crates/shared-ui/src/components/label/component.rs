use dioxus::prelude::*;

/// Form field label.
#[component]
pub fn Label(
    #[props(default)] html_for: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            class: "label",
            r#for: "{html_for}",
            ..attributes,
            {children}
        }
    }
}
