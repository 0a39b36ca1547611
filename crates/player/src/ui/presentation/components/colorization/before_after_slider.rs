//! Before/after comparison slider.
//!
//! The colored shot sits underneath; the black-and-white shot is
//! clipped to the handle position, so dragging sweeps the reveal.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BeforeAfterSliderProps {
    pub before_url: String,
    pub after_url: String,
}

#[component]
pub fn BeforeAfterSlider(props: BeforeAfterSliderProps) -> Element {
    let mut position = use_signal(|| 50u32);

    rsx! {
        div {
            class: "ba-slider",

            img {
                class: "ba-image ba-image-after",
                src: "{props.after_url}",
                alt: "après",
            }

            div {
                class: "ba-clip",
                style: "width: {position}%;",
                img {
                    class: "ba-image ba-image-before",
                    src: "{props.before_url}",
                    alt: "avant",
                }
            }

            div {
                class: "ba-handle",
                style: "left: {position}%;",
            }

            input {
                class: "ba-range",
                r#type: "range",
                min: "0",
                max: "100",
                value: "{position}",
                oninput: move |event| {
                    if let Ok(value) = event.value().parse::<u32>() {
                        position.set(value.min(100));
                    }
                },
            }
        }
    }
}
