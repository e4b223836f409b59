//! Asynchronous form submission contract.
//!
//! The browser posts a multipart body with [`REQUESTED_WITH_HEADER`] set to
//! [`REQUESTED_WITH_VALUE`]; the server answers with a [`SubmissionResponse`]
//! instead of a redirect.

pub mod contact;
pub mod enquiry;

use serde::{Deserialize, Serialize};

/// Header that marks a submission as programmatic.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// The only `status` value treated as success. Anything else is a failure.
pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// JSON body returned by the submission endpoints
///
/// Both fields default so that a body of the wrong shape still parses and
/// lands in the failure branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmissionResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Server message, ignoring blank strings.
    pub fn display_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }

    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Declarative description of one form field as rendered by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    Hidden,
}

impl FieldKind {
    /// `type` attribute for `<input>`; text areas render their own tag.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Hidden => "hidden",
        }
    }
}
