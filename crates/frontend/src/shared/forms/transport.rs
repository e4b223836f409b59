use super::request::FormSubmissionRequest;
use contracts::forms::{REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};
use gloo_net::http::Request;
use thiserror::Error;

/// Ошибки доставки формы (до разбора ответа)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Sends a captured form and hands back the raw response body.
///
/// Tests swap in a fake; the browser uses [`FetchTransport`].
#[allow(async_fn_in_trait)]
pub trait SubmitTransport {
    async fn post(
        &self,
        endpoint: &str,
        request: &FormSubmissionRequest,
    ) -> Result<String, TransportError>;
}

/// Headers that mark the request as an async form submission.
pub fn submission_headers() -> [(&'static str, &'static str); 1] {
    [(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)]
}

/// `fetch` with a multipart body.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl SubmitTransport for FetchTransport {
    async fn post(
        &self,
        endpoint: &str,
        request: &FormSubmissionRequest,
    ) -> Result<String, TransportError> {
        let body = request
            .to_form_data()
            .map_err(|e| TransportError::Request(format!("{e:?}")))?;

        // Content-Type не задаём: браузер сам проставит boundary для multipart
        let builder = submission_headers()
            .into_iter()
            .fold(Request::post(endpoint), |b, (name, value)| b.header(name, value));

        let response = builder
            .body(body)
            .map_err(|e| TransportError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.ok() {
            log::warn!("{} answered HTTP {}", endpoint, response.status());
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_is_marked_as_ajax() {
        assert_eq!(
            submission_headers(),
            [("X-Requested-With", "XMLHttpRequest")]
        );
    }

    #[test]
    fn test_transport_error_text() {
        let err = TransportError::Network("Failed to fetch".into());
        assert_eq!(err.to_string(), "Network error: Failed to fetch");
    }
}
