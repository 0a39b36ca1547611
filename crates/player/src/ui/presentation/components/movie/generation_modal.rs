//! Movie generation modal.
//!
//! The "generation" is staged: five labelled steps of two seconds each,
//! an elapsed counter, then the site's pre-rendered clip. Every sleep is
//! epoch-guarded so closing the modal kills the sequence.

use dioxus::prelude::*;
use sbiba_domain::HeritageSite;

use crate::application::timers::SessionTimer;
use crate::presentation::use_services;
use crate::use_platform;

const STEP_MS: u64 = 2000;
const STEPS: [&str; 5] = [
    "Analyse du site archéologique…",
    "Collecte des références historiques…",
    "Génération des scènes…",
    "Assemblage du film…",
    "Finalisation…",
];

#[derive(Props, Clone, PartialEq)]
pub struct GenerationModalProps {
    pub site: HeritageSite,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn GenerationModal(props: GenerationModalProps) -> Element {
    let services = use_services();
    let platform = use_platform();

    // Index into STEPS; STEPS.len() means the clip is ready.
    let mut step = use_signal(|| 0usize);
    let mut elapsed_secs = use_signal(|| 0u64);
    let timer = use_hook(SessionTimer::new);

    {
        let timer = timer.clone();
        use_drop(move || timer.cancel());
    }

    // Elapsed-seconds counter.
    {
        let timer = timer.clone();
        let platform = platform.clone();
        use_future(move || {
            let timer = timer.clone();
            let platform = platform.clone();
            async move {
                while *step.read() < STEPS.len() {
                    if !timer.delay(platform.as_ref(), 1000).await {
                        return;
                    }
                    let next = *elapsed_secs.read() + 1;
                    elapsed_secs.set(next);
                }
            }
        });
    }

    // Staged steps.
    {
        let timer = timer.clone();
        let platform = platform.clone();
        use_future(move || {
            let timer = timer.clone();
            let platform = platform.clone();
            async move {
                for index in 0..STEPS.len() {
                    step.set(index);
                    if !timer.delay(platform.as_ref(), STEP_MS).await {
                        return;
                    }
                }
                step.set(STEPS.len());
            }
        });
    }

    let current = *step.read();
    let done = current >= STEPS.len();
    let current_label = STEPS.get(current).copied().unwrap_or_default();
    let video = services.media_url(&props.site.video_path);

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal movie-modal",

                button {
                    class: "modal-close",
                    onclick: move |_| props.on_close.call(()),
                    "✕"
                }

                h2 { "{props.site.name}" }

                if done {
                    video {
                        class: "movie-player",
                        src: "{video}",
                        controls: true,
                        autoplay: true,
                    }
                    p { class: "movie-description", "{props.site.description}" }
                } else {
                    div {
                        class: "movie-progress",
                        p { class: "movie-step", "{current_label}" }

                        ul {
                            class: "movie-steps",
                            for (index, label) in STEPS.iter().enumerate() {
                                li {
                                    class: if index < current { "movie-step-done" }
                                           else if index == current { "movie-step-active" }
                                           else { "movie-step-pending" },
                                    "{label}"
                                }
                            }
                        }

                        span { class: "movie-elapsed", "{elapsed_secs} s écoulées" }
                    }
                }
            }
        }
    }
}
