//! Product enquiry form (`/enquiry/`).
//!
//! The page may be opened with `?sku=<code>` from a product card; the code
//! travels with the submission in a hidden field.

use super::{FieldKind, FieldSpec};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/enquiry/";

pub const FIELD_SKU: &str = "sku";
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_MESSAGE: &str = "message";

pub const FIELDS: [FieldSpec; 6] = [
    FieldSpec { name: FIELD_SKU, label: "Product SKU", kind: FieldKind::Hidden, required: false },
    FieldSpec { name: FIELD_NAME, label: "Full Name", kind: FieldKind::Text, required: true },
    FieldSpec { name: FIELD_EMAIL, label: "Email Address", kind: FieldKind::Email, required: true },
    FieldSpec { name: FIELD_PHONE, label: "Phone Number", kind: FieldKind::Tel, required: false },
    FieldSpec { name: FIELD_SUBJECT, label: "Subject", kind: FieldKind::Text, required: true },
    FieldSpec { name: FIELD_MESSAGE, label: "Message", kind: FieldKind::TextArea, required: true },
];

/// Query string of the enquiry page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryQuery {
    #[serde(default)]
    pub sku: Option<String>,
}

impl EnquiryQuery {
    /// SKU with surrounding whitespace removed; empty values count as absent.
    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Subject line suggested when the visitor arrives from a product.
pub fn subject_for_sku(sku: &str) -> String {
    format!("Enquiry about product {}", sku)
}
