//! Home page enhancements.

mod carousel;

pub use carousel::{init_latest_products, SwiperOptions};

use crate::config::ScrollBlock;
use crate::shared::dom;
use web_sys::MouseEvent;

const CARD_LIFT: &str = "translateY(-8px) scale(1.02)";
const CARD_REST: &str = "translateY(0) scale(1)";

pub fn enhance_home() {
    init_latest_products();
    bind_scroll_indicator();
    bind_feature_cards();
}

/// The bouncing arrow in the hero scrolls to the next section.
fn bind_scroll_indicator() {
    let Some(indicator) = dom::query(".animate-bounce") else {
        return;
    };
    dom::listen(&indicator, "click", |_: MouseEvent| {
        if let Some(next) = dom::query("section:nth-child(2)") {
            dom::scroll_into_view(&next, ScrollBlock::Start);
        }
    });
}

fn bind_feature_cards() {
    for card in dom::query_all(".group") {
        let lifted = card.clone();
        dom::listen(&card, "mouseenter", move |_: MouseEvent| {
            dom::set_style(&lifted, "transform", CARD_LIFT);
        });
        let rested = card.clone();
        dom::listen(&card, "mouseleave", move |_: MouseEvent| {
            dom::set_style(&rested, "transform", CARD_REST);
        });
    }
}
