//! 3D reconstruction modal: staged build-up, then the model viewer.

use dioxus::prelude::*;
use sbiba_shared::ArtifactRecord;

use crate::application::timers::SessionTimer;
use crate::presentation::components::reconstruction::GlbViewer;
use crate::presentation::use_services;
use crate::use_platform;

const STEP_MS: u64 = 1500;
const STEPS: [&str; 3] = [
    "Analyse des fragments…",
    "Reconstruction du maillage 3D…",
    "Application des textures…",
];

#[derive(Props, Clone, PartialEq)]
pub struct ReconstructionModalProps {
    pub artifact: ArtifactRecord,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn ReconstructionModal(props: ReconstructionModalProps) -> Element {
    let services = use_services();
    let platform = use_platform();

    let mut step = use_signal(|| 0usize);
    let timer = use_hook(SessionTimer::new);

    {
        let timer = timer.clone();
        use_drop(move || timer.cancel());
    }

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
    let label = STEPS.get(current).copied().unwrap_or_default();
    let percent = (current * 100) / STEPS.len();
    let model_url = services.media_url(&props.artifact.model_path);

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal reconstruction-modal",

                button {
                    class: "modal-close",
                    onclick: move |_| props.on_close.call(()),
                    "✕"
                }

                h2 { "{props.artifact.titre}" }

                if done {
                    GlbViewer {
                        src: model_url,
                        alt: props.artifact.titre.clone(),
                    }
                    p { class: "reconstruction-description", "{props.artifact.description}" }
                } else {
                    div {
                        class: "reconstruction-progress",
                        p { "{label}" }
                        div {
                            class: "progress-track",
                            div {
                                class: "progress-fill",
                                style: "width: {percent}%;",
                            }
                        }
                    }
                }
            }
        }
    }
}
