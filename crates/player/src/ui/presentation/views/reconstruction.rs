//! 3D reconstruction page: artifacts fetched from the backend.

use dioxus::prelude::*;
use sbiba_shared::ArtifactRecord;

use crate::presentation::components::reconstruction::ReconstructionModal;
use crate::presentation::use_services;

#[component]
pub fn Reconstruction() -> Element {
    let services = use_services();
    let mut selected = use_signal(|| Option::<ArtifactRecord>::None);

    let artifacts = {
        let services = services.clone();
        use_resource(move || {
            let services = services.clone();
            async move { services.artifact.list().await }
        })
    };

    rsx! {
        section {
            class: "page reconstruction-page",
            h1 { "Reconstitution 3D" }
            p { "Les objets retrouvés à Sbiba, reconstruits en trois dimensions." }

            match &*artifacts.read_unchecked() {
                None => rsx! {
                    p { class: "page-loading", "Chargement des objets…" }
                },
                Some(Err(_)) => rsx! {
                    p { class: "page-error", "Les objets n'ont pas pu être chargés. Vérifiez que le serveur est en ligne." }
                },
                Some(Ok(records)) => rsx! {
                    div {
                        class: "card-grid",
                        for record in records.iter().cloned() {
                            div {
                                class: "artifact-card",
                                onclick: {
                                    let record = record.clone();
                                    move |_| selected.set(Some(record.clone()))
                                },
                                img {
                                    class: "artifact-card-image",
                                    src: services.media_url(&format!("/objects/{}.jpg", record.figure)),
                                    alt: "{record.titre}",
                                }
                                h3 { "{record.titre}" }
                                p { "{record.summary()}" }
                            }
                        }
                    }
                },
            }

            if let Some(artifact) = selected.read().clone() {
                ReconstructionModal {
                    artifact,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}
