//! Site configuration.
//!
//! Search order:
//! 1. `<script id="site-config" type="application/json">` rendered by the server
//! 2. Falls back to the embedded default

use contracts::forms::{contact, enquiry};
use serde::{Deserialize, Serialize};

const CONFIG_ELEMENT_ID: &str = "site-config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
{
    "log_level": "debug",
    "dial_prefix": "+91",
    "contact": {
        "endpoint": "/contact/",
        "idle_label": "Send Message",
        "busy_label": "Sending...",
        "success_message": "Your message has been sent successfully. We will contact you soon.",
        "fallback_message": "An error occurred. Please try again.",
        "success_panel_id": "contact-message",
        "failure_panel_id": "contact-message",
        "scroll_block": "nearest"
    },
    "enquiry": {
        "endpoint": "/enquiry/",
        "idle_label": "Send Enquiry",
        "busy_label": "Sending...",
        "success_message": "Your enquiry has been submitted successfully.",
        "fallback_message": "Something went wrong",
        "success_panel_id": "success-message",
        "failure_panel_id": "error-message",
        "scroll_block": "center"
    }
}
"#;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Phone numbers on contact cards start with this prefix.
    #[serde(default = "default_dial_prefix")]
    pub dial_prefix: String,
    #[serde(default = "FormConfig::contact")]
    pub contact: FormConfig,
    #[serde(default = "FormConfig::enquiry")]
    pub enquiry: FormConfig,
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_dial_prefix() -> String {
    "+91".to_string()
}

/// Alignment used when a result panel is scrolled into view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    #[default]
    Nearest,
    Center,
}

/// Settings of one submission form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormConfig {
    pub endpoint: String,
    pub idle_label: String,
    pub busy_label: String,
    /// Shown when the server reports success without a message.
    pub success_message: String,
    /// Shown for transport errors and failures without a message.
    pub fallback_message: String,
    pub success_panel_id: String,
    pub failure_panel_id: String,
    #[serde(default)]
    pub scroll_block: ScrollBlock,
}

impl FormConfig {
    pub fn contact() -> Self {
        Self {
            endpoint: contact::ENDPOINT.to_string(),
            idle_label: "Send Message".to_string(),
            busy_label: "Sending...".to_string(),
            success_message:
                "Your message has been sent successfully. We will contact you soon.".to_string(),
            fallback_message: "An error occurred. Please try again.".to_string(),
            success_panel_id: "contact-message".to_string(),
            failure_panel_id: "contact-message".to_string(),
            scroll_block: ScrollBlock::Nearest,
        }
    }

    pub fn enquiry() -> Self {
        Self {
            endpoint: enquiry::ENDPOINT.to_string(),
            idle_label: "Send Enquiry".to_string(),
            busy_label: "Sending...".to_string(),
            success_message: "Your enquiry has been submitted successfully.".to_string(),
            fallback_message: "Something went wrong".to_string(),
            success_panel_id: "success-message".to_string(),
            failure_panel_id: "error-message".to_string(),
            scroll_block: ScrollBlock::Center,
        }
    }

    pub fn panel_id(&self, success: bool) -> &str {
        if success {
            &self.success_panel_id
        } else {
            &self.failure_panel_id
        }
    }

    /// The mount point's `data-endpoint` (the form `action`) wins over config.
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dial_prefix: default_dial_prefix(),
            contact: FormConfig::contact(),
            enquiry: FormConfig::enquiry(),
        }
    }
}

/// Load configuration from the page, falling back to the embedded default.
///
/// Called before logging is initialised, so problems are reported through
/// the returned warning instead of `log`.
pub fn load_config() -> (SiteConfig, Option<String>) {
    let embedded = || SiteConfig::from_json(DEFAULT_CONFIG).unwrap_or_default();

    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) => match SiteConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(e) => (
                embedded(),
                Some(format!("#{} is invalid, using defaults: {}", CONFIG_ELEMENT_ID, e)),
            ),
        },
        None => (embedded(), None),
    }
}
