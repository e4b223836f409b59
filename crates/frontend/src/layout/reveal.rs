//! Scroll-reveal animations (AOS), when the page loads the library.

use crate::shared::theme::to_js;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AosOptions {
    pub once: bool,
    pub duration: u32,
    pub easing: &'static str,
}

impl Default for AosOptions {
    fn default() -> Self {
        Self {
            once: true,
            duration: 700,
            easing: "ease-out-cubic",
        }
    }
}

pub fn init_reveal() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(aos) = js_sys::Reflect::get(&window, &JsValue::from_str("AOS")) else {
        return;
    };
    if aos.is_undefined() || aos.is_null() {
        log::debug!("AOS not loaded, skipping scroll reveal");
        return;
    }

    let init = js_sys::Reflect::get(&aos, &JsValue::from_str("init"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    let (Some(init), Ok(options)) = (init, to_js(&AosOptions::default())) else {
        log::warn!("AOS.init unavailable");
        return;
    };
    if let Err(e) = init.call1(&aos, &options) {
        log::error!("AOS.init failed: {:?}", e);
    }
}
