//! Colorization page: archive photos, before and after.

use dioxus::prelude::*;
use sbiba_shared::ColorationRecord;

use crate::presentation::components::colorization::ColorizationModal;
use crate::presentation::use_services;

#[component]
pub fn Colorization() -> Element {
    let services = use_services();
    let mut selected = use_signal(|| Option::<ColorationRecord>::None);

    let records = {
        let services = services.clone();
        use_resource(move || {
            let services = services.clone();
            async move { services.coloration.list().await }
        })
    };

    rsx! {
        section {
            class: "page colorization-page",
            h1 { "Coloration d'archives" }
            p { "Les photographies anciennes de Sbiba, recolorisées par IA." }

            match &*records.read_unchecked() {
                None => rsx! {
                    p { class: "page-loading", "Chargement de la galerie…" }
                },
                Some(Err(_)) => rsx! {
                    p { class: "page-error", "La galerie n'a pas pu être chargée. Vérifiez que le serveur est en ligne." }
                },
                Some(Ok(records)) => rsx! {
                    div {
                        class: "card-grid",
                        for record in records.iter().cloned() {
                            div {
                                class: "coloration-card",
                                onclick: {
                                    let record = record.clone();
                                    move |_| selected.set(Some(record.clone()))
                                },
                                img {
                                    class: "coloration-card-image",
                                    src: services.media_url(&record.before_image(false)),
                                    alt: "{record.titre}",
                                }
                                h3 { "{record.titre}" }
                            }
                        }
                    }
                },
            }

            if let Some(record) = selected.read().clone() {
                ColorizationModal {
                    record,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}
