use crate::{
    dom::Document,
    observer::{OneShotObserver, VisibilityRule},
};

/// Swaps `data-src` into `src` the first time an image scrolls into view.
#[derive(Debug, Clone)]
pub struct LazyImages {
    observer: OneShotObserver<()>,
}

impl LazyImages {
    pub fn register(doc: &Document) -> Option<Self> {
        let images = doc.query_all("img[data-src]");
        if images.is_empty() {
            return None;
        }
        let mut observer = OneShotObserver::new(VisibilityRule::ANY);
        for image in images {
            observer.observe(image, ());
        }
        Some(Self { observer })
    }

    pub fn check(&mut self, doc: &mut Document) -> usize {
        let visible = self.observer.take_visible(doc);
        for (image, ()) in &visible {
            if let Some(source) = doc.attr(*image, "data-src").map(str::to_string) {
                doc.set_attr(*image, "src", &source);
                doc.remove_attr(*image, "data-src");
            }
        }
        visible.len()
    }

    pub fn pending(&self) -> usize {
        self.observer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    #[test]
    fn loads_when_scrolled_into_view() {
        let mut doc = Document::new("portfolio.test");
        let body = doc.body();
        let image = doc.append(
            body,
            Element::new("img")
                .with_attr("data-src", "assets/img/projet.webp")
                .with_rect(1500.0, 200.0),
        );

        let mut lazy = LazyImages::register(&doc).expect("images");
        assert_eq!(lazy.check(&mut doc), 0);
        assert_eq!(doc.attr(image, "src"), None);

        doc.set_scroll_y(1000.0);
        assert_eq!(lazy.check(&mut doc), 1);
        assert_eq!(doc.attr(image, "src"), Some("assets/img/projet.webp"));
        assert_eq!(doc.attr(image, "data-src"), None);
        assert_eq!(lazy.pending(), 0);
    }
}
