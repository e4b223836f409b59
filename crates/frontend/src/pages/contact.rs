//! Contact page: the contact form island and clickable info cards.

use crate::config::{FormConfig, SiteConfig};
use crate::shared::api_utils::contact_link;
use crate::shared::dom;
use crate::shared::forms::{
    BusyIndicator, FetchTransport, FormController, FormField, FormFields, Panel, SubmitButton,
};
use crate::shared::icons::icon;
use contracts::forms::contact;
use leptos::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

/// Placeholder rendered by the contact template.
pub const MOUNT_ID: &str = "contact-form-root";
/// Hidden field carrying the server's CSRF token.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

const ALERT_SUCCESS: &str = "p-4 rounded-lg bg-green-100 border border-green-400 text-green-700";
const ALERT_FAILURE: &str = "p-4 rounded-lg bg-red-100 border border-red-400 text-red-700";

/// Initial field model; the CSRF token survives resets.
pub fn initial_fields(csrf_token: Option<String>) -> FormFields {
    let mut fields = FormFields::from_specs(&contact::FIELDS);
    if let Some(token) = csrf_token {
        fields.set(CSRF_FIELD, token);
        fields.pin(CSRF_FIELD);
    }
    fields
}

#[component]
pub fn ContactForm(config: FormConfig, csrf_token: Option<String>) -> impl IntoView {
    let vm = FormController::new(config, initial_fields(csrf_token), FetchTransport);

    let action = vm.config.endpoint.clone();
    let vm_submit = vm.clone();
    let vm_panel = vm.clone();
    let vm_alert = vm.clone();

    view! {
        <form
            id="contact-form"
            action=action
            method="post"
            class="space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                vm_submit.submit_command();
            }
        >
            {contact::FIELDS
                .iter()
                .map(|spec| view! { <FormField controller=vm.clone() spec=*spec /> })
                .collect_view()}
            <SubmitButton controller=vm.clone() indicator=BusyIndicator::SwapIcon />
        </form>

        <div
            id="contact-message"
            class=move || if vm_panel.view().panel.is_some() { "mt-6" } else { "mt-6 hidden" }
        >
            {move || {
                let form_view = vm_alert.view();
                let (class, icon_name) = if form_view.shows(Panel::Success) {
                    (ALERT_SUCCESS, "success")
                } else {
                    (ALERT_FAILURE, "error")
                };
                view! {
                    <div id="contact-alert" class=class>
                        {icon(icon_name)}
                        {form_view.panel_text().to_string()}
                    </div>
                }
            }}
        </div>
    }
}

pub fn mount(root: HtmlElement, site: &SiteConfig) {
    let dataset = root.dataset();
    let config = site.contact.clone().with_endpoint(dataset.get("endpoint"));
    let csrf_token = dataset.get("csrfToken");

    leptos::mount::mount_to(root, move || {
        view! { <ContactForm config=config csrf_token=csrf_token /> }
    })
    .forget();
    log::debug!("Contact form mounted");

    bind_contact_cards(&site.dial_prefix);
}

/// Cards with a phone number or e-mail open the dialer / mail client.
fn bind_contact_cards(dial_prefix: &str) {
    for card in dom::query_all(r#"[class*="cursor-pointer"]"#) {
        let target = card.clone();
        let dial_prefix = dial_prefix.to_string();
        dom::listen(&card, "click", move |_: MouseEvent| {
            let texts = paragraph_texts(&target);
            let Some(link) = contact_link(&texts, &dial_prefix) else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url(&link);
            }
        });
    }
}

fn paragraph_texts(card: &HtmlElement) -> Vec<String> {
    let Ok(list) = card.query_selector_all("p") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csrf_token_is_pinned() {
        let mut fields = initial_fields(Some("t0k".into()));
        fields.set(contact::FIELD_NAME, "Asha");
        fields.reset();
        assert_eq!(fields.get(CSRF_FIELD), "t0k");
        assert_eq!(fields.get(contact::FIELD_NAME), "");
    }

    #[test]
    fn test_without_csrf_token() {
        let fields = initial_fields(None);
        assert_eq!(fields.iter().count(), contact::FIELDS.len());
    }
}
