use contracts::forms::FieldSpec;

/// Current values of a form's text fields, in document order.
///
/// Pinned fields survive [`FormFields::reset`] with their last non-empty value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    entries: Vec<(String, String)>,
    pinned: Vec<String>,
}

impl FormFields {
    pub fn from_specs(specs: &[FieldSpec]) -> Self {
        Self {
            entries: specs
                .iter()
                .map(|s| (s.name.to_string(), String::new()))
                .collect(),
            pinned: Vec::new(),
        }
    }

    /// Value of a field, empty when the field is unknown.
    pub fn get(&self, name: &str) -> &str {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).trim().is_empty()
    }

    pub fn pin(&mut self, name: &str) {
        if !self.pinned.iter().any(|p| p == name) {
            self.pinned.push(name.to_string());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Clear every field, then put pinned values back.
    pub fn reset(&mut self) {
        let kept: Vec<(String, String)> = self
            .pinned
            .iter()
            .map(|name| (name.clone(), self.get(name).to_string()))
            .filter(|(_, v)| !v.is_empty())
            .collect();

        for (_, value) in self.entries.iter_mut() {
            value.clear();
        }
        for (name, value) in kept {
            self.set(&name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::forms::{contact, enquiry};

    #[test]
    fn test_fields_follow_spec_order() {
        let fields = FormFields::from_specs(&contact::FIELDS);
        let names: Vec<&str> = fields.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["name", "email", "phone", "subject", "message"]);
        assert!(fields.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_set_unknown_field_appends() {
        let mut fields = FormFields::from_specs(&contact::FIELDS);
        fields.set("csrfmiddlewaretoken", "t0k");
        assert_eq!(fields.get("csrfmiddlewaretoken"), "t0k");
        assert_eq!(fields.iter().last(), Some(("csrfmiddlewaretoken", "t0k")));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut fields = FormFields::from_specs(&contact::FIELDS);
        fields.set(contact::FIELD_NAME, "Asha");
        fields.set(contact::FIELD_MESSAGE, "Hello");
        fields.reset();
        assert!(fields.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_reset_keeps_pinned_value() {
        let mut fields = FormFields::from_specs(&enquiry::FIELDS);
        fields.set(enquiry::FIELD_SKU, "ABC123");
        fields.set(enquiry::FIELD_SUBJECT, "Enquiry about product ABC123");
        fields.pin(enquiry::FIELD_SKU);
        fields.reset();
        assert_eq!(fields.get(enquiry::FIELD_SKU), "ABC123");
        assert_eq!(fields.get(enquiry::FIELD_SUBJECT), "");
    }

    #[test]
    fn test_pinned_empty_field_stays_empty() {
        let mut fields = FormFields::from_specs(&enquiry::FIELDS);
        fields.pin(enquiry::FIELD_SKU);
        fields.reset();
        assert_eq!(fields.get(enquiry::FIELD_SKU), "");
    }
}
