//! Page bootstrap.
//!
//! The storefront is rendered by the server; this bundle is loaded on every
//! page and enhances whatever it finds there.

use crate::config::SiteConfig;
use crate::layout::header::bind_header;
use crate::layout::reveal::init_reveal;
use crate::pages::{contact, enquiry, home};
use crate::shared::dom;
use crate::shared::theme::apply_brand_theme;

pub fn start(config: &SiteConfig) {
    apply_brand_theme();
    bind_header();
    init_reveal();
    home::enhance_home();
    mount_islands(config);
}

/// Mount the form islands whose placeholders exist on this page.
fn mount_islands(config: &SiteConfig) {
    if let Some(root) = dom::html_by_id(contact::MOUNT_ID) {
        contact::mount(root, config);
    }
    if let Some(root) = dom::html_by_id(enquiry::MOUNT_ID) {
        enquiry::mount(root, config);
    }
}
