//! "Latest products" carousel, driven by the Swiper library.

use crate::shared::dom;
use crate::shared::theme::to_js;
use contracts::theme;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const SELECTOR: &str = ".latest-products-swiper";
const PULSE_CLASS: &str = "animate-pulse";
const PULSE_MS: u32 = 500;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwiperOptions {
    pub slides_per_view: u32,
    pub space_between: u32,
    pub r#loop: bool,
    pub autoplay: Autoplay,
    pub pagination: Pagination,
    pub navigation: Navigation,
    pub effect: &'static str,
    /// Min viewport width → layout.
    pub breakpoints: BTreeMap<u32, Breakpoint>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Autoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
    pub pause_on_mouse_enter: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub el: &'static str,
    pub clickable: bool,
    pub dynamic_bullets: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub next_el: &'static str,
    pub prev_el: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub slides_per_view: u32,
    pub space_between: u32,
}

impl SwiperOptions {
    pub fn latest_products() -> Self {
        let breakpoints = [(640, 2, 20), (768, 2, 30), (1024, 3, 30), (1280, 4, 30)]
            .into_iter()
            .map(|(width, slides_per_view, space_between)| {
                (width, Breakpoint { slides_per_view, space_between })
            })
            .collect();

        Self {
            slides_per_view: 1,
            space_between: 30,
            r#loop: true,
            autoplay: Autoplay {
                delay: 4000,
                disable_on_interaction: false,
                pause_on_mouse_enter: true,
            },
            pagination: Pagination {
                el: ".swiper-pagination",
                clickable: true,
                dynamic_bullets: true,
            },
            navigation: Navigation {
                next_el: ".swiper-button-next",
                prev_el: ".swiper-button-prev",
            },
            effect: "slide",
            breakpoints,
        }
    }
}

fn paint_bullets() {
    for bullet in dom::query_all(".swiper-pagination-bullet") {
        dom::set_style(&bullet, "background-color", theme::RED);
        dom::set_style(&bullet, "opacity", "0.3");
    }
}

fn pulse_active_slide() {
    let Some(slide) = dom::query(".swiper-slide-active") else {
        return;
    };
    dom::add_classes(&slide, &[PULSE_CLASS]);
    Timeout::new(PULSE_MS, move || dom::remove_classes(&slide, &[PULSE_CLASS])).forget();
}

/// Swiper event handlers, kept alive for the page lifetime.
fn event_handlers() -> Result<JsValue, JsValue> {
    let on = js_sys::Object::new();
    let handlers: [(&str, fn()); 2] = [("init", paint_bullets), ("slideChange", pulse_active_slide)];
    for (name, handler) in handlers {
        let closure = Closure::<dyn Fn()>::new(handler);
        js_sys::Reflect::set(&on, &JsValue::from_str(name), closure.as_ref())?;
        closure.forget();
    }
    Ok(on.into())
}

fn construct(options: &SwiperOptions) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("Swiper"))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| JsValue::from_str("Swiper is not loaded"))?;

    let options_js = to_js(options).map_err(JsValue::from)?;
    js_sys::Reflect::set(&options_js, &JsValue::from_str("on"), &event_handlers()?)?;

    let args = js_sys::Array::of2(&JsValue::from_str(SELECTOR), &options_js);
    js_sys::Reflect::construct(&ctor, &args)?;
    Ok(())
}

pub fn init_latest_products() {
    if dom::query(SELECTOR).is_none() {
        return;
    }
    match construct(&SwiperOptions::latest_products()) {
        Ok(()) => log::debug!("Carousel {} initialised", SELECTOR),
        Err(e) => log::warn!("Carousel {} not initialised: {:?}", SELECTOR, e),
    }
}
