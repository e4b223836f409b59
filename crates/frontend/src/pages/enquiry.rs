//! Enquiry page: the product enquiry form island.
//!
//! `?sku=<code>` links the enquiry to a product. The code fills the hidden
//! `sku` field, seeds an empty subject and survives form resets.

use crate::config::{FormConfig, SiteConfig};
use crate::pages::contact::CSRF_FIELD;
use crate::shared::api_utils::{current_query, parse_query};
use crate::shared::forms::{
    BusyIndicator, FetchTransport, FormController, FormField, FormFields, Panel, SubmitButton,
};
use crate::shared::icons::icon;
use contracts::forms::enquiry::{self, subject_for_sku, EnquiryQuery};
use leptos::prelude::*;
use web_sys::HtmlElement;

pub const MOUNT_ID: &str = "enquiry-form-root";

/// Put the SKU into the form. Returns whether a SKU was applied.
pub fn apply_correlation(fields: &mut FormFields, sku: Option<&str>) -> bool {
    let Some(sku) = sku else {
        return false;
    };
    fields.set(enquiry::FIELD_SKU, sku);
    fields.pin(enquiry::FIELD_SKU);
    if fields.is_blank(enquiry::FIELD_SUBJECT) {
        fields.set(enquiry::FIELD_SUBJECT, subject_for_sku(sku));
    }
    true
}

pub fn initial_fields(sku: Option<&str>, csrf_token: Option<String>) -> FormFields {
    let mut fields = FormFields::from_specs(&enquiry::FIELDS);
    if let Some(token) = csrf_token {
        fields.set(CSRF_FIELD, token);
        fields.pin(CSRF_FIELD);
    }
    apply_correlation(&mut fields, sku);
    fields
}

#[component]
pub fn EnquiryForm(
    config: FormConfig,
    sku: Option<String>,
    csrf_token: Option<String>,
) -> impl IntoView {
    let vm = FormController::new(
        config,
        initial_fields(sku.as_deref(), csrf_token),
        FetchTransport,
    );

    let action = vm.config.endpoint.clone();
    let vm_submit = vm.clone();
    let vm_success = vm.clone();
    let vm_success_text = vm.clone();
    let vm_error = vm.clone();
    let vm_error_text = vm.clone();

    let sku_display = if sku.is_some() { "block" } else { "none" };

    view! {
        <div id="sku-container" class="mb-6 p-3 rounded-lg bg-arivas-red-light text-arivas-dark" style:display=sku_display>
            {icon("tag")}
            "Product SKU: "
            <strong>{sku.clone().unwrap_or_default()}</strong>
        </div>

        <form
            id="enquiry-form"
            action=action
            method="post"
            class="space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                vm_submit.submit_command();
            }
        >
            {enquiry::FIELDS
                .iter()
                .map(|spec| view! { <FormField controller=vm.clone() spec=*spec /> })
                .collect_view()}
            <SubmitButton controller=vm.clone() indicator=BusyIndicator::Spinner />
        </form>

        <div
            id="success-message"
            class=move || {
                if vm_success.view().shows(Panel::Success) {
                    "mt-6 p-4 rounded-lg bg-arivas-green-light border border-arivas-green text-arivas-green"
                } else {
                    "hidden"
                }
            }
        >
            {icon("success")}
            <span>{move || vm_success_text.view().panel_text().to_string()}</span>
        </div>

        <div
            id="error-message"
            class=move || {
                if vm_error.view().shows(Panel::Failure) {
                    "mt-6 p-4 rounded-lg bg-red-100 border border-red-400 text-red-700"
                } else {
                    "hidden"
                }
            }
        >
            {icon("error")}
            <span id="error-text">{move || vm_error_text.view().panel_text().to_string()}</span>
        </div>
    }
}

pub fn mount(root: HtmlElement, site: &SiteConfig) {
    let dataset = root.dataset();
    let config = site.enquiry.clone().with_endpoint(dataset.get("endpoint"));
    let csrf_token = dataset.get("csrfToken");

    // Читаем SKU один раз при загрузке страницы
    let query: EnquiryQuery = parse_query(&current_query());
    let sku = query.sku().map(str::to_string);
    if let Some(sku) = &sku {
        log::debug!("Enquiry opened for SKU {}", sku);
    }

    leptos::mount::mount_to(root, move || {
        view! { <EnquiryForm config=config sku=sku csrf_token=csrf_token /> }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_prefills_hidden_field_and_subject() {
        let fields = initial_fields(Some("ABC123"), None);
        assert_eq!(fields.get(enquiry::FIELD_SKU), "ABC123");
        assert!(fields.get(enquiry::FIELD_SUBJECT).contains("ABC123"));
    }

    #[test]
    fn test_existing_subject_is_kept() {
        let mut fields = FormFields::from_specs(&enquiry::FIELDS);
        fields.set(enquiry::FIELD_SUBJECT, "Bulk pricing");
        assert!(apply_correlation(&mut fields, Some("ABC123")));
        assert_eq!(fields.get(enquiry::FIELD_SUBJECT), "Bulk pricing");
        assert_eq!(fields.get(enquiry::FIELD_SKU), "ABC123");
    }

    #[test]
    fn test_without_sku_nothing_is_filled() {
        let fields = initial_fields(None, None);
        assert_eq!(fields.get(enquiry::FIELD_SKU), "");
        assert_eq!(fields.get(enquiry::FIELD_SUBJECT), "");
    }

    #[test]
    fn test_sku_survives_reset() {
        let mut fields = initial_fields(Some("ABC123"), Some("t0k".into()));
        fields.reset();
        assert_eq!(fields.get(enquiry::FIELD_SKU), "ABC123");
        assert_eq!(fields.get(CSRF_FIELD), "t0k");
        assert_eq!(fields.get(enquiry::FIELD_SUBJECT), "");
    }

    #[test]
    fn test_query_to_prefill() {
        let query: EnquiryQuery = parse_query("?sku=ABC123");
        let fields = initial_fields(query.sku(), None);
        assert_eq!(fields.get(enquiry::FIELD_SKU), "ABC123");
    }
}
