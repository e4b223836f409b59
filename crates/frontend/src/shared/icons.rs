use leptos::prelude::*;

/// Font Awesome class list for an icon name.
pub fn icon_class(name: &str) -> &'static str {
    match name {
        "send" => "fas fa-paper-plane",
        "spinner" => "fas fa-spinner fa-spin",
        "success" => "fas fa-check-circle mr-2",
        "error" => "fas fa-exclamation-circle mr-2",
        "tag" => "fas fa-tag mr-2",
        _ => "fas fa-circle",
    }
}

pub fn icon(name: &str) -> AnyView {
    view! { <i class=icon_class(name) aria-hidden="true"></i> }.into_any()
}
