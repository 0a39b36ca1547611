//! WASM platform implementations
//!
//! Browser-backed providers: `js_sys` for time and random,
//! `gloo-timers` for async sleep, `web_sys::console` for logging.

use std::{future::Future, pin::Pin};

use crate::ports::outbound::{
    DocumentProvider, LogProvider, RandomProvider, SleepProvider, TimeProvider,
};

use super::Platform;

/// WASM time provider using js_sys::Date
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        (js_sys::Date::now() / 1000.0) as u64
    }

    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM sleep provider using gloo-timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(ms as u32).await;
        })
    }
}

/// WASM random provider using js_sys::Math
#[derive(Clone, Default)]
pub struct WasmRandomProvider;

impl RandomProvider for WasmRandomProvider {
    fn random_f64(&self) -> f64 {
        js_sys::Math::random()
    }

    fn random_range(&self, min: i32, max: i32) -> i32 {
        let span = (max - min + 1) as f64;
        min + (js_sys::Math::random() * span) as i32
    }
}

/// WASM log provider using the browser console
#[derive(Clone, Default)]
pub struct WasmLogProvider;

impl LogProvider for WasmLogProvider {
    fn info(&self, msg: &str) {
        web_sys::console::info_1(&msg.into());
    }
    fn error(&self, msg: &str) {
        web_sys::console::error_1(&msg.into());
    }
    fn debug(&self, msg: &str) {
        web_sys::console::debug_1(&msg.into());
    }
    fn warn(&self, msg: &str) {
        web_sys::console::warn_1(&msg.into());
    }
}

/// WASM document provider - sets the browser tab title
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create the browser platform container.
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmSleepProvider,
        WasmRandomProvider,
        WasmLogProvider,
        WasmDocumentProvider,
    )
}
