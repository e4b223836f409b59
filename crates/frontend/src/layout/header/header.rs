//! Behaviour for the server-rendered site header.
//!
//! Markup contract: `#header`, `#mobile-menu`, `#menu-icon`, `#close-icon`,
//! `#mobile-product-categories`, `#mobile-products-chevron`. The templates
//! call `toggleMobileMenu()`, `closeMobileMenu()` and
//! `toggleMobileProductsDropdown()` from `onclick`.

use super::state::{HeaderScroll, MobileMenu};
use crate::shared::dom;
use leptos::prelude::window_event_listener;
use std::cell::Cell;
use wasm_bindgen::prelude::*;

thread_local! {
    static MENU: Cell<MobileMenu> = Cell::new(MobileMenu::default());
}

fn apply_scroll(scroll: HeaderScroll) {
    if let Some(header) = dom::by_id("header") {
        let (add, remove) = scroll.classes();
        dom::remove_classes(&header, remove);
        dom::add_classes(&header, add);
    }
}

fn render_menu(menu: MobileMenu) {
    if let Some(el) = dom::by_id("mobile-menu") {
        dom::set_hidden(&el, !menu.open);
    }
    if let Some(el) = dom::by_id("menu-icon") {
        dom::set_hidden(&el, menu.open);
    }
    if let Some(el) = dom::by_id("close-icon") {
        dom::set_hidden(&el, !menu.open);
    }
    if let Some(el) = dom::by_id("mobile-product-categories") {
        dom::set_hidden(&el, !menu.products_open);
    }
    if let Some(el) = dom::html_by_id("mobile-products-chevron") {
        dom::set_style(&el, "transform", menu.chevron_rotation());
    }
}

fn update_menu(f: impl FnOnce(&mut MobileMenu)) {
    let menu = MENU.with(|cell| {
        let mut menu = cell.get();
        f(&mut menu);
        cell.set(menu);
        menu
    });
    render_menu(menu);
}

/// Read the initial menu state from the markup.
fn menu_from_dom() -> MobileMenu {
    let visible = |id: &str| {
        dom::by_id(id)
            .map(|el| !el.class_list().contains("hidden"))
            .unwrap_or(false)
    };
    MobileMenu {
        open: visible("mobile-menu"),
        products_open: visible("mobile-product-categories"),
    }
}

pub fn toggle_mobile_menu() {
    update_menu(MobileMenu::toggle);
}

pub fn close_mobile_menu() {
    update_menu(MobileMenu::close);
}

pub fn toggle_mobile_products_dropdown() {
    update_menu(MobileMenu::toggle_products);
}

fn expose(window: &web_sys::Window, name: &str, f: fn()) {
    let closure = Closure::<dyn Fn()>::new(f);
    if js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref()).is_err() {
        log::warn!("Could not expose {}()", name);
    }
    closure.forget();
}

/// Wire the scroll effect and the mobile menu handlers.
pub fn bind_header() {
    let Some(window) = web_sys::window() else {
        return;
    };

    expose(&window, "toggleMobileMenu", toggle_mobile_menu);
    expose(&window, "closeMobileMenu", close_mobile_menu);
    expose(&window, "toggleMobileProductsDropdown", toggle_mobile_products_dropdown);

    MENU.with(|cell| cell.set(menu_from_dom()));

    if dom::by_id("header").is_none() {
        log::debug!("No #header on this page");
        return;
    }

    let scroll_y = || web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
    apply_scroll(HeaderScroll::from_offset(scroll_y()));

    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        apply_scroll(HeaderScroll::from_offset(scroll_y()));
    });
}
