//! Assistant chat page.
//!
//! The backend wants a knowledge-source id with every question, so the
//! page fetches it once on mount and keeps the input disabled until it
//! arrives. A failed call surfaces a generic banner; there is no retry.
//!
//! Two send paths: the button asks the backend, Enter jots a simulated
//! field note in the journal style (no backend involved).

use dioxus::prelude::*;

use crate::presentation::components::chat::{MessageDisplay, WritingIndicator};
use crate::presentation::state::ChatState;
use crate::presentation::use_services;
use crate::use_platform;

const BACKEND_DOWN: &str =
    "Le guide est momentanément indisponible. Vérifiez que le serveur est en ligne.";

const FIELD_NOTE_DELAY_MS: u64 = 1000;
const FIELD_NOTE_LOCATION: &str = "Complexe du temple oriental";

#[component]
pub fn Chat() -> Element {
    let mut chat = use_context::<ChatState>();
    let services = use_services();
    let platform = use_platform();

    let mut draft = use_signal(String::new);

    // Source id fetch on mount.
    {
        let services = services.clone();
        use_future(move || {
            let services = services.clone();
            async move {
                if chat.ready() {
                    return;
                }
                match services.chat.fetch_source_id().await {
                    Ok(source_id) => {
                        chat.set_source_id(source_id);
                        chat.clear_error();
                    }
                    Err(_) => chat.set_error(BACKEND_DOWN),
                }
            }
        });
    }

    let send = {
        let services = services.clone();
        move || {
            let question = draft.read().trim().to_string();
            if question.is_empty() || *chat.is_writing.read() {
                return;
            }
            let Some(source_id) = chat.source_id.read().clone() else {
                return;
            };
            draft.set(String::new());
            chat.push_user(&question);
            chat.is_writing.set(true);

            let services = services.clone();
            spawn(async move {
                match services.chat.ask(&source_id, &question).await {
                    Ok(answer) => chat.push_assistant(&answer),
                    Err(_) => chat.set_error(BACKEND_DOWN),
                }
                chat.is_writing.set(false);
            });
        }
    };

    // Enter key: simulated field note, no backend round-trip.
    let send_note = {
        let platform = platform.clone();
        move || {
            let question = draft.read().trim().to_string();
            if question.is_empty() || *chat.is_writing.read() {
                return;
            }
            draft.set(String::new());
            chat.push_user(&question);
            chat.is_writing.set(true);

            let platform = platform.clone();
            spawn(async move {
                platform.sleep_ms(FIELD_NOTE_DELAY_MS).await;
                chat.push_note(
                    &format!("Quelques fragments de sagesse ancienne à propos de {question}…"),
                    FIELD_NOTE_LOCATION,
                );
                chat.is_writing.set(false);
            });
        }
    };

    let ready = chat.ready();
    let is_writing = *chat.is_writing.read();
    let messages = chat.messages.read().clone();
    let error = chat.error.read().clone();

    rsx! {
        section {
            class: "page chat-page",
            h1 { "Guide archéologique" }

            if let Some(error) = error {
                div { class: "chat-error-banner", "{error}" }
            }

            div {
                class: "chat-messages",
                for message in messages {
                    MessageDisplay { message }
                }
                if is_writing {
                    WritingIndicator {}
                }
            }

            div {
                class: "chat-input-row",
                input {
                    class: "chat-input",
                    placeholder: "Posez votre question sur Sbiba…",
                    disabled: !ready,
                    value: "{draft}",
                    oninput: move |event| draft.set(event.value()),
                    onkeydown: {
                        let mut send_note = send_note.clone();
                        move |event: KeyboardEvent| {
                            if event.key() == Key::Enter {
                                send_note();
                            }
                        }
                    },
                }
                button {
                    class: "chat-send-button",
                    disabled: !ready || is_writing,
                    onclick: {
                        let mut send = send.clone();
                        move |_| send()
                    },
                    "Envoyer"
                }
            }
        }
    }
}
