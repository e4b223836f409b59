//! Brand theme for the Tailwind CDN build.
//!
//! The CDN script reads `window.tailwind.config`; the tokens themselves live
//! in `contracts::theme` so the server templates and this bundle agree.

use contracts::theme::TailwindConfig;
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Convert a config to a plain JS object (maps become objects, not `Map`s).
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Install the brand theme as `window.tailwind.config`.
pub fn apply_brand_theme() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let config = match to_js(&TailwindConfig::brand()) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to serialize theme: {}", e);
            return;
        }
    };

    let key = JsValue::from_str("tailwind");
    let tailwind = js_sys::Reflect::get(&window, &key)
        .ok()
        .filter(|t| t.is_object())
        .unwrap_or_else(|| js_sys::Object::new().into());

    if js_sys::Reflect::set(&tailwind, &JsValue::from_str("config"), &config).is_err()
        || js_sys::Reflect::set(&window, &key, &tailwind).is_err()
    {
        log::warn!("Could not assign tailwind.config");
        return;
    }
    log::debug!("Brand theme applied");
}
