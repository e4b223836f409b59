//! Best-effort DOM helpers for enhancing server-rendered markup.
//!
//! Every helper tolerates a missing window, document or element: the same
//! bundle runs on every page and most elements exist on only some of them.

use crate::config::ScrollBlock;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn html_by_id(id: &str) -> Option<HtmlElement> {
    by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

/// All elements matching `selector`, as `HtmlElement`s.
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn add_classes(el: &Element, classes: &[&str]) {
    for class in classes {
        let _ = el.class_list().add_1(class);
    }
}

pub fn remove_classes(el: &Element, classes: &[&str]) {
    for class in classes {
        let _ = el.class_list().remove_1(class);
    }
}

/// Show or hide via Tailwind's `hidden` utility.
pub fn set_hidden(el: &Element, hidden: bool) {
    let _ = el.class_list().toggle_with_force("hidden", hidden);
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

fn scroll_options(block: ScrollBlock) -> ScrollIntoViewOptions {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(match block {
        ScrollBlock::Start => ScrollLogicalPosition::Start,
        ScrollBlock::Nearest => ScrollLogicalPosition::Nearest,
        ScrollBlock::Center => ScrollLogicalPosition::Center,
    });
    options
}

pub fn scroll_into_view(el: &Element, block: ScrollBlock) {
    el.scroll_into_view_with_scroll_into_view_options(&scroll_options(block));
}

pub fn scroll_to_id(id: &str, block: ScrollBlock) {
    match by_id(id) {
        Some(el) => scroll_into_view(&el, block),
        None => log::debug!("#{} not found, nothing to scroll to", id),
    }
}

/// Attach a listener that lives as long as the page.
pub fn listen<E>(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget(); // Keep the closure alive
}
