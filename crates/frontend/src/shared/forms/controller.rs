use super::fields::FormFields;
use super::request::FormSubmissionRequest;
use super::required::FieldMarker;
use super::state::{FormView, SubmissionResult, UiState};
use super::transport::{SubmitTransport, TransportError};
use crate::config::FormConfig;
use crate::shared::dom;
use contracts::forms::SubmissionResponse;
use leptos::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Turn a transport outcome into the result shown to the visitor.
///
/// Transport and parse errors are logged and replaced by the configured
/// fallback; the raw error never reaches the page.
pub fn resolve(outcome: Result<String, TransportError>, config: &FormConfig) -> SubmissionResult {
    let body = match outcome {
        Ok(body) => body,
        Err(e) => {
            log::error!("Form submission to {} failed: {}", config.endpoint, e);
            return SubmissionResult::Failure(config.fallback_message.clone());
        }
    };

    let response = match SubmissionResponse::from_json(&body) {
        Ok(r) => r,
        Err(e) => {
            log::error!(
                "Form submission to {} returned an unreadable body: {}",
                config.endpoint,
                e
            );
            return SubmissionResult::Failure(config.fallback_message.clone());
        }
    };

    if response.is_success() {
        SubmissionResult::Success(
            response
                .display_message()
                .unwrap_or(config.success_message.as_str())
                .to_string(),
        )
    } else {
        SubmissionResult::Failure(
            response
                .display_message()
                .unwrap_or(config.fallback_message.as_str())
                .to_string(),
        )
    }
}

/// One network round trip for a captured request.
pub async fn submit<T: SubmitTransport + ?Sized>(
    transport: &T,
    request: &FormSubmissionRequest,
    config: &FormConfig,
) -> SubmissionResult {
    log::debug!("Submitting form to {}", config.endpoint);
    let outcome = transport.post(&config.endpoint, request).await;
    resolve(outcome, config)
}

/// Form state without any reactive wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormModel {
    pub state: UiState,
    pub fields: FormFields,
    markers: BTreeMap<String, FieldMarker>,
}

impl FormModel {
    pub fn new(fields: FormFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Enter `Submitting` and snapshot the fields.
    ///
    /// Returns `None` while a request is already in flight.
    pub fn begin(&mut self) -> Option<FormSubmissionRequest> {
        if self.state.is_submitting() {
            return None;
        }
        self.state = UiState::Submitting;
        Some(FormSubmissionRequest::from_fields(&self.fields))
    }

    /// Apply the terminal outcome; success clears the form.
    pub fn finish(&mut self, result: SubmissionResult) {
        if result.is_success() {
            self.fields.reset();
            self.markers.clear();
        }
        self.state = result.into();
    }

    pub fn blur(&mut self, name: &str) {
        let marker = FieldMarker::on_blur(self.fields.get(name));
        self.markers.insert(name.to_string(), marker);
    }

    pub fn marker(&self, name: &str) -> FieldMarker {
        self.markers.get(name).copied().unwrap_or_default()
    }

    pub fn view(&self, config: &FormConfig) -> FormView {
        self.state.render(config)
    }
}

/// Settles a submission exactly once.
///
/// If the task is dropped before [`InFlight::settle`] runs, the form is
/// settled with the fallback failure so the submit control comes back.
pub struct InFlight<F: FnOnce(SubmissionResult)> {
    settle: Option<F>,
    fallback: String,
}

impl<F: FnOnce(SubmissionResult)> InFlight<F> {
    pub fn new(fallback: impl Into<String>, settle: F) -> Self {
        Self {
            settle: Some(settle),
            fallback: fallback.into(),
        }
    }

    pub fn settle(mut self, result: SubmissionResult) {
        if let Some(f) = self.settle.take() {
            f(result);
        }
    }
}

impl<F: FnOnce(SubmissionResult)> Drop for InFlight<F> {
    fn drop(&mut self) {
        if let Some(f) = self.settle.take() {
            log::warn!("Form submission ended without a result");
            f(SubmissionResult::Failure(std::mem::take(&mut self.fallback)));
        }
    }
}

/// ViewModel binding one form instance to a transport.
pub struct FormController<T: SubmitTransport + Send + Sync + 'static> {
    pub model: RwSignal<FormModel>,
    pub config: Arc<FormConfig>,
    transport: Arc<T>,
}

impl<T: SubmitTransport + Send + Sync + 'static> Clone for FormController<T> {
    fn clone(&self) -> Self {
        Self {
            model: self.model,
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: SubmitTransport + Send + Sync + 'static> FormController<T> {
    pub fn new(config: FormConfig, fields: FormFields, transport: T) -> Self {
        Self {
            model: RwSignal::new(FormModel::new(fields)),
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn view(&self) -> FormView {
        self.model.with(|m| m.view(&self.config))
    }

    pub fn value(&self, name: &str) -> String {
        self.model.with(|m| m.fields.get(name).to_string())
    }

    pub fn set_value(&self, name: &str, value: String) {
        self.model.update(|m| m.fields.set(name, value));
    }

    pub fn marker(&self, name: &str) -> FieldMarker {
        self.model.with(|m| m.marker(name))
    }

    pub fn blur_command(&self, name: &str) {
        self.model.update(|m| m.blur(name));
    }

    /// Handle a submit event: one request, one terminal state.
    pub fn submit_command(&self) {
        let Some(request) = self.model.try_update(|m| m.begin()).flatten() else {
            log::debug!("Submit ignored: {} is already in flight", self.config.endpoint);
            return;
        };

        let model = self.model;
        let config = Arc::clone(&self.config);
        let transport = Arc::clone(&self.transport);

        wasm_bindgen_futures::spawn_local(async move {
            let panel_config = Arc::clone(&config);
            let guard = InFlight::new(config.fallback_message.clone(), move |result| {
                let panel_id = panel_config.panel_id(result.is_success()).to_string();
                let block = panel_config.scroll_block;
                model.update(|m| m.finish(result));
                // Панель появится после перерисовки
                request_animation_frame(move || dom::scroll_to_id(&panel_id, block));
            });
            let result = submit(transport.as_ref(), &request, &config).await;
            guard.settle(result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::state::Panel;
    use contracts::forms::{contact, enquiry};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Canned transport that records what it was sent.
    struct FakeTransport {
        reply: Result<String, TransportError>,
        sent: RefCell<Vec<FormSubmissionRequest>>,
        endpoints: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn replying(body: &str) -> Self {
            Self {
                reply: Ok(body.to_string()),
                sent: RefCell::new(Vec::new()),
                endpoints: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(TransportError::Network("Failed to fetch".into())),
                sent: RefCell::new(Vec::new()),
                endpoints: RefCell::new(Vec::new()),
            }
        }
    }

    impl SubmitTransport for FakeTransport {
        async fn post(
            &self,
            endpoint: &str,
            request: &FormSubmissionRequest,
        ) -> Result<String, TransportError> {
            self.endpoints.borrow_mut().push(endpoint.to_string());
            self.sent.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    fn filled_contact() -> FormModel {
        let mut fields = FormFields::from_specs(&contact::FIELDS);
        fields.set(contact::FIELD_NAME, "Asha");
        fields.set(contact::FIELD_EMAIL, "asha@example.com");
        fields.set(contact::FIELD_SUBJECT, "Bulk order");
        fields.set(contact::FIELD_MESSAGE, "Please call me");
        FormModel::new(fields)
    }

    fn run(model: &mut FormModel, transport: &FakeTransport, config: &FormConfig) {
        let request = model.begin().expect("form was idle");
        assert!(!model.view(config).control_enabled);
        let result = block_on(submit(transport, &request, config));
        model.finish(result);
    }

    #[test]
    fn test_control_disabled_only_while_in_flight() {
        let config = FormConfig::contact();
        let mut model = filled_contact();
        assert!(model.view(&config).control_enabled);

        let request = model.begin().unwrap();
        let view = model.view(&config);
        assert!(!view.control_enabled);
        assert!(view.panel.is_none());
        assert!(model.begin().is_none(), "second submit must be refused");

        let transport = FakeTransport::replying(r#"{"status":"success","message":"Sent"}"#);
        model.finish(block_on(submit(&transport, &request, &config)));
        let view = model.view(&config);
        assert!(view.control_enabled);
        assert_eq!(view.label, "Send Message");
        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(*transport.endpoints.borrow(), vec!["/contact/".to_string()]);
    }

    #[test]
    fn test_submission_goes_to_overridden_endpoint() {
        let config = FormConfig::enquiry().with_endpoint(Some("/shop/enquiry/".into()));
        let mut model = FormModel::new(FormFields::from_specs(&enquiry::FIELDS));
        let transport = FakeTransport::replying(r#"{"status":"success"}"#);
        run(&mut model, &transport, &config);
        assert_eq!(*transport.endpoints.borrow(), vec!["/shop/enquiry/".to_string()]);
    }

    #[test]
    fn test_non_object_body_is_a_failure() {
        let config = FormConfig::contact();
        let result = resolve(Ok("[]".into()), &config);
        assert_eq!(result, SubmissionResult::Failure(config.fallback_message.clone()));
    }

    #[test]
    fn test_server_message_is_shown_verbatim() {
        let config = FormConfig::contact();
        let result = resolve(
            Ok(r#"{"status":"error","message":"  Invalid email "}"#.into()),
            &config,
        );
        assert_eq!(result, SubmissionResult::Failure("  Invalid email ".into()));
    }

    #[test]
    fn test_success_clears_fields_and_shows_message() {
        let config = FormConfig::contact();
        let mut model = filled_contact();
        let transport = FakeTransport::replying(
            r#"{"status":"success","message":"Your message has been sent successfully."}"#,
        );
        run(&mut model, &transport, &config);

        let view = model.view(&config);
        assert!(view.shows(Panel::Success));
        assert!(!view.shows(Panel::Failure));
        assert_eq!(view.panel_text(), "Your message has been sent successfully.");
        assert!(model.fields.iter().all(|(_, v)| v.is_empty()));

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].text(contact::FIELD_EMAIL), Some("asha@example.com"));
    }

    #[test]
    fn test_application_error_shows_server_message() {
        let config = FormConfig::contact();
        let mut model = filled_contact();
        let transport =
            FakeTransport::replying(r#"{"status":"error","message":"Invalid email"}"#);
        run(&mut model, &transport, &config);

        let view = model.view(&config);
        assert!(view.shows(Panel::Failure));
        assert_eq!(view.panel_text(), "Invalid email");
        // Поля не очищаются при ошибке
        assert_eq!(model.fields.get(contact::FIELD_NAME), "Asha");
    }

    #[test]
    fn test_error_without_message_uses_fallback() {
        let config = FormConfig::enquiry();
        let mut model = FormModel::new(FormFields::from_specs(&enquiry::FIELDS));
        run(&mut model, &FakeTransport::replying(r#"{"status":"error"}"#), &config);
        assert_eq!(model.view(&config).panel_text(), config.fallback_message);
    }

    #[test]
    fn test_network_rejection_rearms_control() {
        let config = FormConfig::contact();
        let mut model = filled_contact();
        run(&mut model, &FakeTransport::failing(), &config);

        let view = model.view(&config);
        assert!(view.control_enabled);
        assert!(view.shows(Panel::Failure));
        assert_eq!(view.panel_text(), "An error occurred. Please try again.");
    }

    #[test]
    fn test_html_body_is_a_failure() {
        let config = FormConfig::contact();
        let result = resolve(Ok("<!doctype html><p>Server Error</p>".into()), &config);
        assert_eq!(result, SubmissionResult::Failure(config.fallback_message.clone()));
    }

    #[test]
    fn test_success_without_message_uses_default_text() {
        let config = FormConfig::enquiry();
        let result = resolve(Ok(r#"{"status":"success"}"#.into()), &config);
        assert_eq!(result, SubmissionResult::Success(config.success_message.clone()));
    }

    #[test]
    fn test_enquiry_success_keeps_sku() {
        let config = FormConfig::enquiry();
        let mut fields = FormFields::from_specs(&enquiry::FIELDS);
        fields.set(enquiry::FIELD_SKU, "ABC123");
        fields.pin(enquiry::FIELD_SKU);
        fields.set(enquiry::FIELD_NAME, "Ravi");
        fields.set(enquiry::FIELD_SUBJECT, "Enquiry about product ABC123");
        let mut model = FormModel::new(fields);

        let transport = FakeTransport::replying(r#"{"status":"success","message":"ok"}"#);
        run(&mut model, &transport, &config);
        assert_eq!(model.fields.get(enquiry::FIELD_SKU), "ABC123");
        assert_eq!(model.fields.get(enquiry::FIELD_NAME), "");
        assert_eq!(model.fields.get(enquiry::FIELD_SUBJECT), "");

        // Повторная отправка в той же вкладке несёт тот же SKU
        run(&mut model, &transport, &config);
        assert_eq!(transport.sent.borrow()[1].text(enquiry::FIELD_SKU), Some("ABC123"));
    }

    #[test]
    fn test_resubmit_from_terminal_state_hides_panel() {
        let config = FormConfig::contact();
        let mut model = filled_contact();
        run(&mut model, &FakeTransport::failing(), &config);
        assert!(model.view(&config).panel.is_some());

        model.begin().unwrap();
        assert!(model.view(&config).panel.is_none());
    }

    #[test]
    fn test_blur_markers() {
        let mut model = filled_contact();
        assert_eq!(model.marker(contact::FIELD_PHONE), FieldMarker::Untouched);

        model.fields.set(contact::FIELD_NAME, "");
        model.blur(contact::FIELD_NAME);
        assert!(model.marker(contact::FIELD_NAME).is_invalid());

        model.fields.set(contact::FIELD_NAME, "A");
        model.blur(contact::FIELD_NAME);
        assert_eq!(model.marker(contact::FIELD_NAME), FieldMarker::Valid);
    }

    #[test]
    fn test_dropped_submission_settles_with_fallback() {
        let settled = RefCell::new(None);
        {
            let _guard = InFlight::new("fallback", |r: SubmissionResult| *settled.borrow_mut() = Some(r));
        }
        assert_eq!(
            settled.into_inner(),
            Some(SubmissionResult::Failure("fallback".into()))
        );
    }

    #[test]
    fn test_settle_runs_once() {
        let calls = RefCell::new(Vec::new());
        let guard = InFlight::new("fallback", |r: SubmissionResult| calls.borrow_mut().push(r));
        guard.settle(SubmissionResult::Success("done".into()));
        assert_eq!(
            calls.into_inner(),
            vec![SubmissionResult::Success("done".into())]
        );
    }
}
