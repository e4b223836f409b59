//! Contact form (`/contact/`).

use super::{FieldKind, FieldSpec};

pub const ENDPOINT: &str = "/contact/";

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_MESSAGE: &str = "message";

pub const FIELDS: [FieldSpec; 5] = [
    FieldSpec { name: FIELD_NAME, label: "Full Name", kind: FieldKind::Text, required: true },
    FieldSpec { name: FIELD_EMAIL, label: "Email Address", kind: FieldKind::Email, required: true },
    FieldSpec { name: FIELD_PHONE, label: "Phone Number", kind: FieldKind::Tel, required: false },
    FieldSpec { name: FIELD_SUBJECT, label: "Subject", kind: FieldKind::Text, required: true },
    FieldSpec { name: FIELD_MESSAGE, label: "Message", kind: FieldKind::TextArea, required: true },
];
