//! Landing page: one card per experience.

use dioxus::prelude::*;

use crate::ui::routes::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    route: Route,
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "🎬",
            title: "Film génératif",
            blurb: "Un court-métrage sur le site archéologique de votre choix.",
            route: Route::MovieGeneration {},
        },
        Feature {
            icon: "🏺",
            title: "Reconstitution 3D",
            blurb: "Les objets retrouvés, reconstruits et manipulables en 3D.",
            route: Route::Reconstruction {},
        },
        Feature {
            icon: "🎨",
            title: "Coloration",
            blurb: "Les photographies d'archives retrouvent leurs couleurs.",
            route: Route::Colorization {},
        },
        Feature {
            icon: "🔍",
            title: "Chasse au patrimoine",
            blurb: "Retrouvez les éléments historiques sur le terrain, caméra en main.",
            route: Route::HeritageHunt {},
        },
        Feature {
            icon: "🛍️",
            title: "Boutique",
            blurb: "Échangez vos points contre des souvenirs artisanaux.",
            route: Route::MarketStore {},
        },
        Feature {
            icon: "🧭",
            title: "Guide archéologique",
            blurb: "Posez vos questions à l'assistant spécialiste de Sbiba.",
            route: Route::Chat {},
        },
        Feature {
            icon: "🏛️",
            title: "Musée virtuel",
            blurb: "Créez votre personnage et parcourez les collections.",
            route: Route::VirtualMuseum {},
        },
    ]
}

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "home-hero",
            h1 { "Sbiba Heritage AI" }
            p {
                "Le patrimoine archéologique de Sbiba, de l'époque romaine à "
                "l'époque byzantine, raconté par l'intelligence artificielle."
            }
        }

        section {
            class: "home-features",
            for feature in features() {
                Link {
                    class: "home-feature-card",
                    to: feature.route,
                    span { class: "home-feature-icon", "{feature.icon}" }
                    h3 { "{feature.title}" }
                    p { "{feature.blurb}" }
                }
            }
        }
    }
}
