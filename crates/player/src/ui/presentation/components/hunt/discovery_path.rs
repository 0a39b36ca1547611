//! Discovery path - the horizontal rail of hunt cards.

use dioxus::prelude::*;
use sbiba_domain::{DiscoveryFilter, ElementKind, HistoricalElement};

use crate::presentation::state::HuntState;
use crate::presentation::use_services;

fn kind_icon(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Artifact => "🏺",
        ElementKind::Building => "🏛️",
        ElementKind::Inscription => "📜",
        ElementKind::Architectural => "🏗️",
    }
}

#[component]
pub fn DiscoveryPath() -> Element {
    let hunt = use_context::<HuntState>();
    let filter = hunt.filter();
    let elements = hunt.visible();

    rsx! {
        div {
            class: "hunt-filters",
            for option in DiscoveryFilter::ALL {
                FilterButton { option, active: option == filter }
            }
        }

        div {
            class: "hunt-rail",
            if elements.is_empty() {
                p {
                    class: "hunt-rail-empty",
                    "Aucun élément dans cette catégorie."
                }
            }
            for element in elements {
                DiscoveryCard { element }
            }
        }
    }
}

#[component]
fn FilterButton(option: DiscoveryFilter, active: bool) -> Element {
    let mut hunt = use_context::<HuntState>();

    rsx! {
        button {
            class: if active { "hunt-filter hunt-filter-active" } else { "hunt-filter" },
            onclick: move |_| hunt.set_filter(option),
            "{option.label()}"
        }
    }
}

#[component]
fn DiscoveryCard(element: HistoricalElement) -> Element {
    let mut hunt = use_context::<HuntState>();
    let services = use_services();

    let id = element.id.clone();
    let image = services.media_url(element.card_image());
    let stars = "★".repeat(u8::from(element.difficulty) as usize);
    let selected = hunt.selected().map(|s| s.id) == Some(element.id.clone());

    rsx! {
        div {
            class: if selected { "hunt-card hunt-card-selected" } else { "hunt-card" },
            onclick: move |_| hunt.select(&id),

            div {
                class: "hunt-card-image-wrap",
                img {
                    class: if element.unlocked { "hunt-card-image" } else { "hunt-card-image hunt-card-silhouette" },
                    src: "{image}",
                    alt: "{element.name}",
                }
                if !element.unlocked {
                    span { class: "hunt-card-lock", "🔒" }
                }
            }

            div {
                class: "hunt-card-body",
                span { class: "hunt-card-kind", "{kind_icon(element.kind)}" }
                h3 { class: "hunt-card-name", "{element.name}" }
                div {
                    class: "hunt-card-meta",
                    span { class: "hunt-card-difficulty", "{stars}" }
                    span { class: "hunt-card-points", "+{element.rewards.points} pts" }
                }
            }
        }
    }
}
