use dioxus::prelude::*;

/// Header row at the top of a page: title on the left, actions on the
/// right, spaced apart by the stylesheet.
#[component]
pub fn PageHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "page-header",
            ..attributes,
            {children}
        }
    }
}

/// The page's h1.
#[component]
pub fn PageTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        h1 {
            class: "page-title",
            ..attributes,
            {children}
        }
    }
}

/// Button cluster rendered opposite the title inside a PageHeader.
#[component]
pub fn PageActions(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "page-actions",
            ..attributes,
            {children}
        }
    }
}
