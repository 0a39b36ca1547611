use dioxus::prelude::*;

/// Three-dot bubble shown while the assistant composes an answer.
#[component]
pub fn WritingIndicator() -> Element {
    rsx! {
        div {
            class: "chat-bubble chat-bubble-assistant chat-writing",
            span { class: "chat-writing-dot", "●" }
            span { class: "chat-writing-dot", "●" }
            span { class: "chat-writing-dot", "●" }
        }
    }
}
