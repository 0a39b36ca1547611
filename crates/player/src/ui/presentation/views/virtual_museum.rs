//! Virtual museum page.
//!
//! First visit: an intro screen leading into the character creation
//! flow. Once a character exists, the museum hall shows it alongside
//! the collections.

use dioxus::prelude::*;

use crate::presentation::components::museum::CharacterCreationModal;
use crate::presentation::state::{AvatarStep, MuseumState};

#[component]
pub fn VirtualMuseum() -> Element {
    let mut museum = use_context::<MuseumState>();

    let step = *museum.step.read();
    let character = museum.character.read().clone();
    let creating = matches!(
        step,
        AvatarStep::Capture | AvatarStep::Processing | AvatarStep::Naming
    );

    rsx! {
        section {
            class: "page museum-page",
            h1 { "Musée virtuel" }

            match (&character, step) {
                (Some(character), _) => rsx! {
                    div {
                        class: "museum-hall",
                        div {
                            class: "museum-character",
                            img {
                                class: "museum-character-avatar",
                                src: "{character.avatar_url}",
                                alt: "{character.name}",
                            }
                            h3 { "{character.name}" }
                            p { "Explorateur du musée de Sbiba" }
                        }
                        p {
                            class: "museum-hall-text",
                            "Bienvenue dans les collections, {character.name}. "
                            "Parcourez les salles romaine et byzantine à votre rythme."
                        }
                        button {
                            class: "museum-recreate-button",
                            onclick: move |_| {
                                museum.character.set(None);
                                museum.reset();
                            },
                            "Recommencer avec un autre personnage"
                        }
                    }
                },
                (None, AvatarStep::Intro) => rsx! {
                    div {
                        class: "museum-intro",
                        p {
                            "Prenez une photo et laissez l'IA créer votre personnage "
                            "de visiteur avant d'entrer dans le musée."
                        }
                        button {
                            class: "museum-start-button",
                            onclick: move |_| museum.start_capture(),
                            "Créer mon personnage"
                        }
                    }
                },
                _ => rsx! {},
            }

            if creating {
                CharacterCreationModal {
                    on_close: move |_| {},
                }
            }
        }
    }
}
