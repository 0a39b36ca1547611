//! Camera capture modal for the heritage hunt.
//!
//! Owns the camera stream for the lifetime of the modal: acquired on
//! mount, released on every exit path (close button, success, unmount).
//! The scan itself is simulated - a fixed delay, then a coin-flip
//! resolution through the `ImageMatcher` seam. Stale timers are
//! neutralized by the session's scan tokens, so closing the modal while
//! a scan is in flight can never unlock anything afterwards.

use dioxus::prelude::*;
use sbiba_domain::{
    CaptureState, CoinFlipMatcher, ImageMatcher, ScanOutcome, RESULT_DISPLAY_MS, SCAN_DELAY_MS,
};

use crate::presentation::state::{HuntState, WalletState};
use crate::presentation::use_services;
use crate::use_platform;

const PREVIEW_ELEMENT_ID: &str = "hunt-camera-preview";

#[derive(Props, Clone, PartialEq)]
pub struct CameraModalProps {
    pub on_close: EventHandler<()>,
}

#[component]
pub fn CameraModal(props: CameraModalProps) -> Element {
    let mut hunt = use_context::<HuntState>();
    let mut wallet = use_context::<WalletState>();
    let services = use_services();
    let platform = use_platform();

    let mut camera_error = use_signal(|| Option::<String>::None);

    // Acquire the stream once the modal is in the DOM.
    {
        let services = services.clone();
        use_future(move || {
            let services = services.clone();
            async move {
                match services.camera.acquire().await {
                    Ok(()) => {
                        if let Err(e) = services.camera.attach_preview(PREVIEW_ELEMENT_ID) {
                            camera_error.set(Some(e.to_string()));
                        }
                    }
                    Err(e) => {
                        // Permission denied or no device: back to the
                        // details panel, no retry.
                        camera_error.set(Some(e.to_string()));
                    }
                }
            }
        });
    }

    // The stream never survives the modal.
    {
        let services = services.clone();
        use_drop(move || services.camera.release());
    }

    let close = {
        let services = services.clone();
        move || {
            hunt.close_session();
            services.camera.release();
            props.on_close.call(());
        }
    };

    let state = hunt.session_state();
    let can_capture = state == CaptureState::Capturing && camera_error.read().is_none();

    let on_capture = {
        let services = services.clone();
        let platform = platform.clone();
        move |_| {
            if !can_capture {
                return;
            }
            let frame = match services.camera.capture_jpeg(PREVIEW_ELEMENT_ID) {
                Ok(frame) => frame,
                Err(e) => {
                    camera_error.set(Some(e.to_string()));
                    return;
                }
            };
            let Some(token) = hunt.begin_scan() else {
                return;
            };
            let target = hunt
                .selected()
                .map(|element| element.model.clone());

            let platform = platform.clone();
            spawn(async move {
                platform.sleep_ms(SCAN_DELAY_MS).await;

                let outcome = match &target {
                    Some(model) => {
                        CoinFlipMatcher::new(platform.random_f64()).resolve(&frame, model)
                    }
                    None => ScanOutcome::Failure,
                };

                // No-op if the modal closed during the delay.
                let Some(result_token) = hunt.resolve_scan(token, outcome) else {
                    return;
                };

                platform.sleep_ms(RESULT_DISPLAY_MS).await;
                if let Some(element_id) = hunt.finish_scan(result_token) {
                    if let Some(points) = hunt.unlock(&element_id) {
                        wallet.earn(points);
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal camera-modal",

                button {
                    class: "modal-close",
                    onclick: {
                        let mut close = close.clone();
                        move |_| close()
                    },
                    "✕"
                }

                if let Some(error) = camera_error.read().as_ref() {
                    div {
                        class: "camera-error",
                        p { "La caméra n'est pas disponible. Autorisez l'accès et réessayez." }
                        p { class: "camera-error-detail", "{error}" }
                    }
                } else {
                    div {
                        class: "camera-frame",
                        video {
                            id: PREVIEW_ELEMENT_ID,
                            class: "camera-preview",
                            autoplay: true,
                            muted: true,
                            "playsinline": "true",
                        }
                        // Corner brackets over the viewfinder.
                        span { class: "camera-corner camera-corner-tl" }
                        span { class: "camera-corner camera-corner-tr" }
                        span { class: "camera-corner camera-corner-bl" }
                        span { class: "camera-corner camera-corner-br" }

                        match state {
                            CaptureState::Scanning => rsx! {
                                div {
                                    class: "camera-overlay camera-overlay-scanning",
                                    p { "Analyse en cours…" }
                                }
                            },
                            CaptureState::Resolved(ScanOutcome::Success) => rsx! {
                                div {
                                    class: "camera-overlay camera-overlay-success",
                                    p { "🎉 Élément découvert !" }
                                }
                            },
                            CaptureState::Resolved(ScanOutcome::Failure) => rsx! {
                                div {
                                    class: "camera-overlay camera-overlay-failure",
                                    p { "Aucune correspondance. Réessayez sous un autre angle." }
                                }
                            },
                            _ => rsx! {},
                        }
                    }

                    button {
                        class: "camera-capture-button",
                        disabled: !can_capture,
                        onclick: on_capture,
                        "📷 Capturer"
                    }
                }
            }
        }
    }
}
