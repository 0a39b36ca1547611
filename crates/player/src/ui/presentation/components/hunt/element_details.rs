//! Details panel for the selected hunt element.
//!
//! Locked elements show only the clue bundle (riddle, location hints,
//! historical context) plus the muted before-shot; unlocked elements show
//! the full description and rewards.

use dioxus::prelude::*;
use sbiba_domain::{ElementId, HistoricalElement};

use crate::presentation::state::HuntState;
use crate::presentation::use_services;

#[derive(Props, Clone, PartialEq)]
pub struct ElementDetailsPanelProps {
    /// Fired when the visitor starts a scan for the shown element.
    pub on_scan: EventHandler<ElementId>,
}

#[component]
pub fn ElementDetailsPanel(props: ElementDetailsPanelProps) -> Element {
    let hunt = use_context::<HuntState>();

    let Some(element) = hunt.selected() else {
        return rsx! {
            div {
                class: "hunt-details hunt-details-empty",
                p { "Choisissez un élément du parcours pour voir ses indices." }
            }
        };
    };

    if element.unlocked {
        rsx! { UnlockedDetails { element } }
    } else {
        rsx! { LockedDetails { element, on_scan: props.on_scan } }
    }
}

#[component]
fn LockedDetails(element: HistoricalElement, on_scan: EventHandler<ElementId>) -> Element {
    let services = use_services();
    let image = services.media_url(&element.locked_detail_image());
    let id = element.id.clone();

    rsx! {
        div {
            class: "hunt-details hunt-details-locked",

            img {
                class: "hunt-details-image hunt-details-image-muted",
                src: "{image}",
                alt: "{element.name}",
            }

            h2 { "{element.name}" }

            div {
                class: "hunt-clue hunt-clue-riddle",
                h4 { "Énigme" }
                p { "{element.clues.riddle}" }
            }

            div {
                class: "hunt-clue hunt-clue-location",
                h4 { "Où chercher" }
                p { "{element.location.area}" }
                ul {
                    for hint in element.location.hints.iter() {
                        li { "{hint}" }
                    }
                }
            }

            div {
                class: "hunt-clue hunt-clue-context",
                h4 { "Contexte historique" }
                p { "{element.clues.historical_context}" }
            }

            button {
                class: "hunt-scan-button",
                onclick: move |_| on_scan.call(id.clone()),
                "📷 Scanner sur place"
            }
        }
    }
}

#[component]
fn UnlockedDetails(element: HistoricalElement) -> Element {
    let services = use_services();
    let image = services.media_url(&element.model.target_image_path);

    rsx! {
        div {
            class: "hunt-details hunt-details-unlocked",

            img {
                class: "hunt-details-image",
                src: "{image}",
                alt: "{element.name}",
            }

            h2 { "{element.name} ✅" }
            p { class: "hunt-details-period", "{element.details.historical_period}" }
            p { "{element.details.description}" }
            p { class: "hunt-details-significance", "{element.details.significance}" }

            if !element.details.fun_facts.is_empty() {
                div {
                    class: "hunt-fun-facts",
                    h4 { "Le saviez-vous ?" }
                    ul {
                        for fact in element.details.fun_facts.iter() {
                            li { "{fact}" }
                        }
                    }
                }
            }

            div {
                class: "hunt-rewards",
                span { "+{element.rewards.points} points" }
                if let Some(badge) = &element.rewards.badge {
                    span { class: "hunt-badge", "🏅 {badge}" }
                }
                if let Some(title) = &element.rewards.title {
                    span { class: "hunt-title", "{title}" }
                }
            }
        }
    }
}
