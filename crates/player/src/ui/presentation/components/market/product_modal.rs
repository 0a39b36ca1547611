//! Product detail modal with the purchase action.

use dioxus::prelude::*;
use sbiba_domain::{Product, SpendResult};

use crate::presentation::state::WalletState;
use crate::presentation::use_services;

#[derive(Props, Clone, PartialEq)]
pub struct ProductModalProps {
    pub product: Product,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn ProductModal(props: ProductModalProps) -> Element {
    let mut wallet = use_context::<WalletState>();
    let services = use_services();

    let mut result = use_signal(|| Option::<SpendResult>::None);

    let price = props.product.price;
    let image = services.media_url(&props.product.image);
    let purchased = matches!(*result.read(), Some(SpendResult::Spent(_)));

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal product-modal",

                button {
                    class: "modal-close",
                    onclick: move |_| props.on_close.call(()),
                    "✕"
                }

                img {
                    class: "product-modal-image",
                    src: "{image}",
                    alt: "{props.product.title}",
                }

                h2 { "{props.product.title}" }
                p { class: "product-category", "{props.product.category}" }
                p { "{props.product.description}" }
                p { class: "product-price", "{props.product.price_label()}" }

                match *result.read() {
                    Some(SpendResult::Spent(remaining)) => rsx! {
                        p {
                            class: "product-result product-result-ok",
                            "Achat confirmé ! Il vous reste {remaining} points."
                        }
                    },
                    Some(SpendResult::InsufficientFunds) => rsx! {
                        p {
                            class: "product-result product-result-err",
                            "Points insuffisants pour cet article."
                        }
                    },
                    None => rsx! {},
                }

                button {
                    class: "product-buy-button",
                    disabled: purchased,
                    onclick: move |_| {
                        result.set(Some(wallet.spend(price)));
                    },
                    "Échanger {price} points"
                }
            }
        }
    }
}
