//! Heritage hunt page: discovery rail, details panel, camera modal.

use dioxus::prelude::*;

use crate::presentation::components::hunt::{CameraModal, DiscoveryPath, ElementDetailsPanel};
use crate::presentation::state::HuntState;

#[component]
pub fn HeritageHunt() -> Element {
    let mut hunt = use_context::<HuntState>();

    // The modal exists exactly while a capture session is open; closing
    // the session (from any path) unmounts it and releases the camera.
    let session_open = hunt.session_open();

    rsx! {
        section {
            class: "page hunt-page",
            h1 { "Chasse au patrimoine" }
            p { "Retrouvez les éléments historiques sur le terrain et scannez-les pour les déverrouiller." }

            DiscoveryPath {}

            ElementDetailsPanel {
                on_scan: move |element_id| {
                    hunt.open_session(element_id);
                },
            }

            if session_open {
                CameraModal {
                    on_close: move |_| {},
                }
            }
        }
    }
}
