//! Colorization modal: simulated processing, then the comparison slider.
//!
//! The progress bar is theatre - 2% every 50ms - matching the pacing of
//! the colorization experience. All ticks go through a `SessionTimer`
//! so closing the modal mid-run stops the loop before the next write.

use dioxus::prelude::*;
use sbiba_shared::ColorationRecord;

use crate::application::timers::SessionTimer;
use crate::presentation::components::colorization::BeforeAfterSlider;
use crate::presentation::use_services;
use crate::use_platform;

const TICK_MS: u64 = 50;
const TICK_PERCENT: u32 = 2;

#[derive(Props, Clone, PartialEq)]
pub struct ColorizationModalProps {
    pub record: ColorationRecord,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn ColorizationModal(props: ColorizationModalProps) -> Element {
    let services = use_services();
    let platform = use_platform();

    let mut progress = use_signal(|| 0u32);
    let mut enhanced = use_signal(|| false);
    let timer = use_hook(SessionTimer::new);

    {
        let timer = timer.clone();
        use_drop(move || timer.cancel());
    }

    // Simulated processing on mount.
    {
        let timer = timer.clone();
        let platform = platform.clone();
        use_future(move || {
            let timer = timer.clone();
            let platform = platform.clone();
            async move {
                while *progress.read() < 100 {
                    if !timer.delay(platform.as_ref(), TICK_MS).await {
                        return;
                    }
                    let next = (*progress.read() + TICK_PERCENT).min(100);
                    progress.set(next);
                }
            }
        });
    }

    let done = *progress.read() >= 100;
    let before = services.media_url(&props.record.before_image(*enhanced.read()));
    let after = services.media_url(&props.record.after_image(*enhanced.read()));

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal colorization-modal",

                button {
                    class: "modal-close",
                    onclick: move |_| props.on_close.call(()),
                    "✕"
                }

                h2 { "{props.record.titre}" }

                if done {
                    BeforeAfterSlider { before_url: before, after_url: after }

                    p { class: "colorization-description", "{props.record.description}" }

                    button {
                        class: "colorization-enhance",
                        disabled: *enhanced.read(),
                        onclick: move |_| enhanced.set(true),
                        if *enhanced.read() { "Qualité améliorée ✓" } else { "✨ Améliorer la qualité" }
                    }
                } else {
                    div {
                        class: "colorization-progress",
                        p { "Coloration en cours…" }
                        div {
                            class: "progress-track",
                            div {
                                class: "progress-fill",
                                style: "width: {progress}%;",
                            }
                        }
                        span { class: "progress-label", "{progress}%" }
                    }
                }
            }
        }
    }
}
