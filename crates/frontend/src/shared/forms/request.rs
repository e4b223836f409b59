use super::fields::FormFields;
use wasm_bindgen::JsValue;

/// Snapshot of a form taken at submit time. Built fresh for every attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSubmissionRequest {
    entries: Vec<(String, String)>,
}

impl FormSubmissionRequest {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            entries: fields
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Multipart body for `fetch`.
    pub fn to_form_data(&self) -> Result<web_sys::FormData, JsValue> {
        let data = web_sys::FormData::new()?;
        for (name, value) in &self.entries {
            data.append_with_str(name, value)?;
        }
        Ok(data)
    }
}
