//! Page URL helpers.

use serde::de::DeserializeOwned;

/// Raw query string of the current page without the leading `?`.
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|s| s.trim_start_matches('?').to_string())
        .unwrap_or_default()
}

/// Decode a query string into `T`.
///
/// Malformed query strings decode to `T::default()`; a broken link must not
/// break the page.
pub fn parse_query<T: DeserializeOwned + Default>(query: &str) -> T {
    serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed query string {:?}: {}", query, e);
        T::default()
    })
}

/// `tel:` / `mailto:` link for a contact card.
///
/// A paragraph containing `dial_prefix` wins over one containing `@`.
pub fn contact_link(texts: &[String], dial_prefix: &str) -> Option<String> {
    let phone = texts
        .iter()
        .map(|t| t.trim())
        .find(|t| !dial_prefix.is_empty() && t.contains(dial_prefix));
    if let Some(phone) = phone {
        return Some(format!("tel:{}", phone));
    }
    texts
        .iter()
        .map(|t| t.trim())
        .find(|t| t.contains('@'))
        .map(|email| format!("mailto:{}", email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::forms::enquiry::EnquiryQuery;

    #[test]
    fn test_parse_sku() {
        let q: EnquiryQuery = parse_query("?sku=ABC123");
        assert_eq!(q.sku(), Some("ABC123"));
    }

    #[test]
    fn test_parse_encoded_sku_with_other_params() {
        let q: EnquiryQuery = parse_query("utm_source=mail&sku=RED%20CHILLI%2D1");
        assert_eq!(q.sku(), Some("RED CHILLI-1"));
    }

    #[test]
    fn test_missing_sku() {
        let q: EnquiryQuery = parse_query("");
        assert_eq!(q, EnquiryQuery::default());
    }

    #[test]
    fn test_contact_link_phone_first() {
        let texts = vec!["info@arivas.in".to_string(), " +91 98765 43210 ".to_string()];
        assert_eq!(
            contact_link(&texts, "+91"),
            Some("tel:+91 98765 43210".to_string())
        );
    }

    #[test]
    fn test_contact_link_email() {
        let texts = vec!["Write to us".to_string(), "info@arivas.in".to_string()];
        assert_eq!(
            contact_link(&texts, "+91"),
            Some("mailto:info@arivas.in".to_string())
        );
        assert_eq!(contact_link(&["Visit us".to_string()], "+91"), None);
    }
}
