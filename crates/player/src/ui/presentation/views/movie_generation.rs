//! Movie generation page: pick a site, watch the staged "generation".

use dioxus::prelude::*;
use sbiba_domain::{catalog, HeritageSite};

use crate::presentation::components::movie::GenerationModal;
use crate::presentation::use_services;

#[component]
pub fn MovieGeneration() -> Element {
    let services = use_services();
    let sites = use_hook(catalog::heritage_sites);
    let mut selected = use_signal(|| Option::<HeritageSite>::None);

    rsx! {
        section {
            class: "page movie-page",
            h1 { "Film génératif" }
            p { "Choisissez un site archéologique de Sbiba pour générer son court-métrage." }

            div {
                class: "card-grid",
                for site in sites.iter().cloned() {
                    div {
                        class: "site-card",
                        onclick: {
                            let site = site.clone();
                            move |_| selected.set(Some(site.clone()))
                        },
                        video {
                            class: "site-card-thumb",
                            src: services.media_url(&site.video_path),
                            muted: true,
                            preload: "metadata",
                        }
                        h3 { "{site.name}" }
                        p { "{site.description}" }
                    }
                }
            }

            if let Some(site) = selected.read().clone() {
                GenerationModal {
                    site,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}
