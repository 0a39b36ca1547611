//! Message rendering for the assistant conversation.
//!
//! Each [`MessageBody`] variant gets its own bubble treatment; the
//! match is exhaustive on purpose so a new kind cannot silently render
//! as plain text.

use dioxus::prelude::*;
use sbiba_domain::{ChatMessage, MessageBody, MessageMetadata};

#[derive(Props, Clone, PartialEq)]
pub struct MessageDisplayProps {
    pub message: ChatMessage,
}

#[component]
pub fn MessageDisplay(props: MessageDisplayProps) -> Element {
    let time = props.message.sent_at.format("%H:%M").to_string();

    match &props.message.body {
        MessageBody::User { content } => rsx! {
            div {
                class: "chat-row chat-row-user",
                div {
                    class: "chat-bubble chat-bubble-user",
                    p { "{content}" }
                    span { class: "chat-time", "{time}" }
                }
            }
        },
        MessageBody::Assistant { content } => rsx! {
            div {
                class: "chat-row chat-row-assistant",
                div {
                    class: "chat-bubble chat-bubble-assistant",
                    p { "{content}" }
                    span { class: "chat-time", "{time}" }
                }
            }
        },
        MessageBody::Scroll { content } => rsx! {
            div {
                class: "chat-row chat-row-center",
                div {
                    class: "chat-scroll",
                    p { "{content}" }
                }
            }
        },
        MessageBody::Artifact { content, metadata } => rsx! {
            div {
                class: "chat-row chat-row-assistant",
                div {
                    class: "chat-bubble chat-card chat-card-artifact",
                    CardHeader { icon: "🏺", metadata: metadata.clone() }
                    p { "{content}" }
                    span { class: "chat-time", "{time}" }
                }
            }
        },
        MessageBody::Location { content, metadata } => rsx! {
            div {
                class: "chat-row chat-row-assistant",
                div {
                    class: "chat-bubble chat-card chat-card-location",
                    CardHeader { icon: "📍", metadata: metadata.clone() }
                    p { "{content}" }
                    span { class: "chat-time", "{time}" }
                }
            }
        },
        MessageBody::Note { content, metadata } => rsx! {
            div {
                class: "chat-row chat-row-assistant",
                div {
                    class: "chat-bubble chat-card chat-card-note",
                    CardHeader { icon: "📜", metadata: metadata.clone() }
                    p { class: "chat-note-text", "{content}" }
                    if !metadata.sketches.is_empty() {
                        div {
                            class: "chat-note-sketches",
                            for sketch in metadata.sketches.iter() {
                                span { class: "chat-note-sketch", "{sketch}" }
                            }
                        }
                    }
                    span { class: "chat-time", "{time}" }
                }
            }
        },
    }
}

#[component]
fn CardHeader(icon: &'static str, metadata: MessageMetadata) -> Element {
    rsx! {
        div {
            class: "chat-card-header",
            span { class: "chat-card-icon", "{icon}" }
            if let Some(title) = &metadata.title {
                span { class: "chat-card-title", "{title}" }
            }
            if let Some(period) = &metadata.period {
                span { class: "chat-card-period", "{period}" }
            }
            if let Some(location) = &metadata.location {
                span { class: "chat-card-location", "{location}" }
            }
        }
    }
}
