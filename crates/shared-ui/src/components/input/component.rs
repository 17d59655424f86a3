use dioxus::prelude::*;

/// A styled text input component.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            class: "input",
            r#type: "{input_type}",
            value,
            placeholder,
            disabled,
            oninput: move |evt| on_input.call(evt),
            ..attributes,
        }
    }
}
