//! Header state, independent of the DOM.

/// Classes of `#header` while the page sits at the top.
pub const TOP_CLASSES: [&str; 2] = ["bg-white/95", "backdrop-blur-sm"];
/// Classes of `#header` once the page is scrolled.
pub const SCROLLED_CLASSES: [&str; 2] = ["bg-white", "shadow-md"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderScroll {
    Top,
    Scrolled,
}

impl HeaderScroll {
    pub fn from_offset(scroll_y: f64) -> Self {
        if scroll_y > 0.0 {
            HeaderScroll::Scrolled
        } else {
            HeaderScroll::Top
        }
    }

    /// `(add, remove)` class lists for `#header`.
    pub fn classes(&self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            HeaderScroll::Top => (&TOP_CLASSES, &SCROLLED_CLASSES),
            HeaderScroll::Scrolled => (&SCROLLED_CLASSES, &TOP_CLASSES),
        }
    }
}

/// Mobile navigation: the menu panel and its products dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    pub open: bool,
    pub products_open: bool,
}

impl MobileMenu {
    /// Toggling the menu always collapses the products dropdown.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.products_open = false;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle_products(&mut self) {
        self.products_open = !self.products_open;
    }

    pub fn chevron_rotation(&self) -> &'static str {
        if self.products_open {
            "rotate(180deg)"
        } else {
            "rotate(0deg)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_classes() {
        assert_eq!(HeaderScroll::from_offset(0.0), HeaderScroll::Top);
        assert_eq!(HeaderScroll::from_offset(0.5), HeaderScroll::Scrolled);

        let (add, remove) = HeaderScroll::Scrolled.classes();
        assert_eq!(add, &["bg-white", "shadow-md"]);
        assert_eq!(remove, &["bg-white/95", "backdrop-blur-sm"]);
    }

    #[test]
    fn test_toggle_collapses_products() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.toggle_products();
        assert!(menu.open && menu.products_open);
        assert_eq!(menu.chevron_rotation(), "rotate(180deg)");

        menu.toggle();
        assert_eq!(menu, MobileMenu::default());
        assert_eq!(menu.chevron_rotation(), "rotate(0deg)");
    }

    #[test]
    fn test_close_keeps_products_state() {
        let mut menu = MobileMenu { open: true, products_open: true };
        menu.close();
        assert!(!menu.open);
        assert!(menu.products_open);
    }
}
