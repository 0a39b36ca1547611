//! Character creation modal for the virtual museum.
//!
//! Drives the full avatar flow: camera capture, upload through the
//! gateway, generation, queue polling, then naming. The camera stream
//! follows the `Capture` step only; it is released the moment the photo
//! is taken and on every exit path.

use dioxus::prelude::*;

use crate::presentation::state::{AvatarStep, MuseumState};
use crate::presentation::use_services;

const PREVIEW_ELEMENT_ID: &str = "museum-camera-preview";

#[derive(Props, Clone, PartialEq)]
pub struct CharacterCreationModalProps {
    pub on_close: EventHandler<()>,
}

#[component]
pub fn CharacterCreationModal(props: CharacterCreationModalProps) -> Element {
    let mut museum = use_context::<MuseumState>();
    let services = use_services();

    let mut name = use_signal(String::new);

    // (Re-)acquire the camera whenever the flow enters the capture step,
    // including after a failed generation.
    {
        let services = services.clone();
        use_effect(move || {
            if *museum.step.read() == AvatarStep::Capture {
                let services = services.clone();
                spawn(async move {
                    match services.camera.acquire().await {
                        Ok(()) => {
                            if let Err(e) = services.camera.attach_preview(PREVIEW_ELEMENT_ID) {
                                museum.fail(&e.to_string());
                            }
                        }
                        Err(e) => {
                            museum.error.set(Some(e.to_string()));
                        }
                    }
                });
            }
        });
    }

    {
        let services = services.clone();
        use_drop(move || services.camera.release());
    }

    let on_capture = {
        let services = services.clone();
        move |_| {
            let frame = match services.camera.capture_jpeg(PREVIEW_ELEMENT_ID) {
                Ok(frame) => frame,
                Err(e) => {
                    museum.error.set(Some(e.to_string()));
                    return;
                }
            };
            services.camera.release();
            museum.begin_processing("Téléversement de la photo…");

            let services = services.clone();
            spawn(async move {
                let avatar = services.avatar.clone();
                museum.set_status("Génération de l'avatar en cours…");
                match avatar.create_from_photo(frame).await {
                    Ok(url) => {
                        // Skip the write if the modal was reset meanwhile.
                        if *museum.step.read() == AvatarStep::Processing {
                            museum.avatar_ready(url);
                        }
                    }
                    Err(e) => {
                        if *museum.step.read() == AvatarStep::Processing {
                            museum.fail(&format!("La génération a échoué ({e})"));
                        }
                    }
                }
            });
        }
    };

    let close = {
        let services = services.clone();
        move |_| {
            services.camera.release();
            museum.reset();
            props.on_close.call(());
        }
    };

    let step = *museum.step.read();
    let status = museum.status.read().clone();
    let error = museum.error.read().clone();
    let pending_avatar = museum.pending_avatar.read().clone();
    let name_ok = !name.read().trim().is_empty();

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal museum-modal",

                button {
                    class: "modal-close",
                    onclick: close,
                    "✕"
                }

                h2 { "Créez votre personnage" }

                if let Some(error) = error {
                    p { class: "museum-error", "{error}" }
                }

                match step {
                    AvatarStep::Capture => rsx! {
                        div {
                            class: "camera-frame",
                            video {
                                id: PREVIEW_ELEMENT_ID,
                                class: "camera-preview",
                                autoplay: true,
                                muted: true,
                                "playsinline": "true",
                            }
                        }
                        button {
                            class: "camera-capture-button",
                            onclick: on_capture,
                            "📷 Prendre la photo"
                        }
                    },
                    AvatarStep::Processing => rsx! {
                        div {
                            class: "museum-processing",
                            div { class: "spinner" }
                            p { "{status}" }
                        }
                    },
                    AvatarStep::Naming => rsx! {
                        if let Some(avatar_url) = pending_avatar {
                            img {
                                class: "museum-avatar-preview",
                                src: "{avatar_url}",
                                alt: "avatar",
                            }
                        }
                        input {
                            class: "museum-name-input",
                            placeholder: "Nom de votre personnage",
                            value: "{name}",
                            oninput: move |event| name.set(event.value()),
                        }
                        button {
                            class: "museum-confirm-button",
                            disabled: !name_ok,
                            onclick: move |_| {
                                let value = name.read().clone();
                                museum.complete(&value);
                            },
                            "Entrer dans le musée"
                        }
                    },
                    // Intro and Done are handled by the page, not the modal.
                    _ => rsx! {},
                }
            }
        }
    }
}
