//! Souvenir store: spend loyalty points.

use dioxus::prelude::*;
use sbiba_domain::{catalog, Product};

use crate::presentation::components::market::ProductModal;
use crate::presentation::state::WalletState;
use crate::presentation::use_services;

#[component]
pub fn MarketStore() -> Element {
    let services = use_services();
    let wallet = use_context::<WalletState>();
    let products = use_hook(catalog::products);
    let mut selected = use_signal(|| Option::<Product>::None);

    rsx! {
        section {
            class: "page market-page",
            h1 { "Boutique de souvenirs" }
            p { "Échangez vos {wallet.points()} points contre l'artisanat de la région." }

            div {
                class: "card-grid",
                for product in products.iter().cloned() {
                    div {
                        class: "product-card",
                        onclick: {
                            let product = product.clone();
                            move |_| selected.set(Some(product.clone()))
                        },
                        img {
                            class: "product-card-image",
                            src: services.media_url(&product.image),
                            alt: "{product.title}",
                        }
                        h3 { "{product.title}" }
                        span { class: "product-price", "{product.price_label()}" }
                    }
                }
            }

            if let Some(product) = selected.read().clone() {
                ProductModal {
                    product,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}
