//! Route table and the shared navigation layout.

use dioxus::prelude::*;

use super::presentation::state::WalletState;
use super::presentation::views::{
    Chat, Colorization, HeritageHunt, Home, MarketStore, MovieGeneration, Reconstruction,
    VirtualMuseum,
};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/film")]
    MovieGeneration {},
    #[route("/reconstitution")]
    Reconstruction {},
    #[route("/coloration")]
    Colorization {},
    #[route("/chasse")]
    HeritageHunt {},
    #[route("/boutique")]
    MarketStore {},
    #[route("/guide")]
    Chat {},
    #[route("/musee")]
    VirtualMuseum {},
}

/// Navigation bar plus page outlet. The wallet balance is visible on
/// every page so store purchases and hunt rewards are felt immediately.
#[component]
fn SiteShell() -> Element {
    let wallet = use_context::<WalletState>();

    rsx! {
        nav {
            class: "site-nav",

            Link {
                class: "site-nav-brand",
                to: Route::Home {},
                "Sbiba Heritage AI"
            }

            div {
                class: "site-nav-links",
                Link { to: Route::MovieGeneration {}, "Film" }
                Link { to: Route::Reconstruction {}, "Reconstitution 3D" }
                Link { to: Route::Colorization {}, "Coloration" }
                Link { to: Route::HeritageHunt {}, "Chasse au patrimoine" }
                Link { to: Route::MarketStore {}, "Boutique" }
                Link { to: Route::Chat {}, "Guide" }
                Link { to: Route::VirtualMuseum {}, "Musée virtuel" }
            }

            div {
                class: "site-nav-wallet",
                title: "Points de fidélité",
                "⭐ {wallet.points()} pts"
            }
        }

        main {
            class: "site-content",
            Outlet::<Route> {}
        }
    }
}
