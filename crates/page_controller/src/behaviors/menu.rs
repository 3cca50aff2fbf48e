use crate::dom::{Document, ElementId};

const OPEN_CLASS: &str = "header-show";

/// Mobile header menu: the toggle opens and closes it, a navigation click or
/// any click outside the header closes it.
#[derive(Debug, Clone)]
pub struct MenuToggle {
    toggle: ElementId,
    header: ElementId,
    nav_links: Vec<ElementId>,
}

impl MenuToggle {
    pub fn register(doc: &Document) -> Option<Self> {
        Some(Self {
            toggle: doc.query(".header-toggle")?,
            header: doc.query(".header")?,
            nav_links: doc.query_all(".navmenu a"),
        })
    }

    pub fn on_click(&self, doc: &mut Document, target: ElementId) {
        if doc.contains(self.toggle, target) {
            doc.toggle_class(self.header, OPEN_CLASS);
            return;
        }
        let on_nav_link = self
            .nav_links
            .iter()
            .any(|link| doc.contains(*link, target));
        if on_nav_link || !doc.contains(self.header, target) {
            doc.remove_class(self.header, OPEN_CLASS);
        }
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_class(self.header, OPEN_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    #[test]
    fn toggle_nav_and_outside_clicks() {
        let mut doc = Document::new("portfolio.test");
        let body = doc.body();
        let header = doc.append(body, Element::new("header").with_class("header"));
        let toggle = doc.append(header, Element::new("i").with_class("header-toggle"));
        let nav = doc.append(header, Element::new("nav").with_class("navmenu"));
        let link = doc.append(nav, Element::new("a").with_attr("href", "#about"));
        let inside = doc.append(header, Element::new("div").with_class("profile"));
        let outside = doc.append(body, Element::new("main"));

        let menu = MenuToggle::register(&doc).expect("menu");
        menu.on_click(&mut doc, toggle);
        assert!(menu.is_open(&doc));
        menu.on_click(&mut doc, inside);
        assert!(menu.is_open(&doc));
        menu.on_click(&mut doc, link);
        assert!(!menu.is_open(&doc));

        menu.on_click(&mut doc, toggle);
        menu.on_click(&mut doc, outside);
        assert!(!menu.is_open(&doc));

        menu.on_click(&mut doc, toggle);
        menu.on_click(&mut doc, toggle);
        assert!(!menu.is_open(&doc));
    }

    #[test]
    fn toggle_without_header_is_inert() {
        let mut doc = Document::new("portfolio.test");
        let body = doc.body();
        doc.append(body, Element::new("i").with_class("header-toggle"));
        assert!(MenuToggle::register(&doc).is_none());
    }
}
