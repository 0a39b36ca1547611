//! Browser camera adapter built on `getUserMedia`.
//!
//! Requests the rear-facing camera at an ideal 1280x720. The stream is
//! held in a `RefCell` so one adapter instance owns at most one stream;
//! `release` stops every track and is safe to call repeatedly.

use std::cell::RefCell;

use base64::Engine;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use crate::ports::outbound::{CameraError, CameraPort};

const JPEG_QUALITY: f64 = 0.8;

pub struct MediaDevicesCamera {
    stream: RefCell<Option<MediaStream>>,
}

impl MediaDevicesCamera {
    pub fn new() -> Self {
        Self {
            stream: RefCell::new(None),
        }
    }
}

impl Default for MediaDevicesCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait(?Send)]
impl CameraPort for MediaDevicesCamera {
    async fn acquire(&self) -> Result<(), CameraError> {
        // Re-acquiring replaces the previous stream.
        self.release();

        let navigator = web_sys::window()
            .map(|w| w.navigator())
            .ok_or_else(|| CameraError::Unavailable("no window".to_string()))?;
        let devices = navigator
            .media_devices()
            .map_err(|e| CameraError::Unavailable(format!("{e:?}")))?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&video_constraints()?);
        constraints.set_audio(&JsValue::FALSE);

        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| CameraError::Unavailable(format!("{e:?}")))?;
        let stream = JsFuture::from(promise)
            .await
            .map_err(|e| CameraError::Unavailable(format!("{e:?}")))?;
        let stream: MediaStream = stream
            .dyn_into()
            .map_err(|_| CameraError::Unavailable("unexpected stream type".to_string()))?;

        *self.stream.borrow_mut() = Some(stream);
        Ok(())
    }

    fn attach_preview(&self, video_element_id: &str) -> Result<(), CameraError> {
        let stream = self.stream.borrow();
        let stream = stream.as_ref().ok_or(CameraError::NotActive)?;

        let video = element_by_id::<HtmlVideoElement>(video_element_id)?;
        video.set_src_object(Some(stream));
        // Autoplay is set on the element; an explicit play() covers
        // browsers that ignore the attribute after srcObject swaps.
        let _ = video.play();
        Ok(())
    }

    fn capture_jpeg(&self, video_element_id: &str) -> Result<Vec<u8>, CameraError> {
        if self.stream.borrow().is_none() {
            return Err(CameraError::NotActive);
        }

        let video = element_by_id::<HtmlVideoElement>(video_element_id)?;
        let width = video.video_width();
        let height = video.video_height();
        if width == 0 || height == 0 {
            return Err(CameraError::Capture("video stream not ready".to_string()));
        }

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CameraError::Capture("no document".to_string()))?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| CameraError::Capture(format!("{e:?}")))?
            .dyn_into()
            .map_err(|_| CameraError::Capture("canvas element type".to_string()))?;
        canvas.set_width(width);
        canvas.set_height(height);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| CameraError::Capture(format!("{e:?}")))?
            .ok_or_else(|| CameraError::Capture("no 2d context".to_string()))?
            .dyn_into()
            .map_err(|_| CameraError::Capture("context type".to_string()))?;
        context
            .draw_image_with_html_video_element(&video, 0.0, 0.0)
            .map_err(|e| CameraError::Capture(format!("{e:?}")))?;

        let data_url = canvas
            .to_data_url_with_type_and_encoder_options(
                "image/jpeg",
                &JsValue::from_f64(JPEG_QUALITY),
            )
            .map_err(|e| CameraError::Capture(format!("{e:?}")))?;

        decode_data_url(&data_url)
    }

    fn release(&self) {
        if let Some(stream) = self.stream.borrow_mut().take() {
            for track in stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
    }

    fn is_active(&self) -> bool {
        self.stream.borrow().is_some()
    }
}

/// Rear camera preferred, 1280x720 ideal. Built via `Reflect` because
/// the constraint dictionary shape is open-ended.
fn video_constraints() -> Result<JsValue, CameraError> {
    let js = |e: JsValue| CameraError::Unavailable(format!("{e:?}"));

    let video = js_sys::Object::new();
    js_sys::Reflect::set(
        &video,
        &"facingMode".into(),
        &JsValue::from_str("environment"),
    )
    .map_err(js)?;

    let width = js_sys::Object::new();
    js_sys::Reflect::set(&width, &"ideal".into(), &JsValue::from_f64(1280.0)).map_err(js)?;
    js_sys::Reflect::set(&video, &"width".into(), &width).map_err(js)?;

    let height = js_sys::Object::new();
    js_sys::Reflect::set(&height, &"ideal".into(), &JsValue::from_f64(720.0)).map_err(js)?;
    js_sys::Reflect::set(&video, &"height".into(), &height).map_err(js)?;

    Ok(video.into())
}

fn element_by_id<T: JsCast>(id: &str) -> Result<T, CameraError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| CameraError::Capture(format!("element #{id} not found")))?
        .dyn_into()
        .map_err(|_| CameraError::Capture(format!("element #{id} has wrong type")))
}

fn decode_data_url(data_url: &str) -> Result<Vec<u8>, CameraError> {
    let encoded = data_url
        .split_once(";base64,")
        .map(|(_, rest)| rest)
        .ok_or_else(|| CameraError::Capture("unexpected data URL shape".to_string()))?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| CameraError::Capture(e.to_string()))
}
