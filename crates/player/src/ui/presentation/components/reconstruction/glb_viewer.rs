//! Embedded GLB viewer.
//!
//! Rendering is delegated to the `<model-viewer>` custom element; the
//! module that registers it is injected once at the app root (wasm) or
//! into the webview head (desktop) via [`MODEL_VIEWER_SCRIPT_SRC`]. rsx
//! has no vocabulary for custom elements, hence the raw HTML.

use dioxus::prelude::*;

/// CDN module script that registers the `<model-viewer>` element.
pub const MODEL_VIEWER_SCRIPT_SRC: &str =
    "https://ajax.googleapis.com/ajax/libs/model-viewer/4.0.0/model-viewer.min.js";

#[derive(Props, Clone, PartialEq)]
pub struct GlbViewerProps {
    /// Absolute URL of the GLB model.
    pub src: String,
    pub alt: String,
}

fn viewer_markup(src: &str, alt: &str) -> String {
    format!(
        r#"<model-viewer src="{src}" alt="{alt}" camera-controls auto-rotate shadow-intensity="1" style="width: 100%; height: 100%;"></model-viewer>"#
    )
}

#[component]
pub fn GlbViewer(props: GlbViewerProps) -> Element {
    let markup = viewer_markup(&props.src, &props.alt);

    rsx! {
        div {
            class: "glb-viewer",
            dangerous_inner_html: "{markup}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_markup_points_at_the_model() {
        let markup = viewer_markup("http://localhost:5000/static/models/Figure 335.glb", "Capital");
        assert!(markup.starts_with("<model-viewer "));
        assert!(markup.contains(r#"src="http://localhost:5000/static/models/Figure 335.glb""#));
        assert!(markup.contains(r#"alt="Capital""#));
        assert!(markup.contains("camera-controls"));
    }

    #[test]
    fn test_registration_script_is_a_module_url() {
        assert!(MODEL_VIEWER_SCRIPT_SRC.ends_with("model-viewer.min.js"));
    }
}
