use crate::dom::{Document, ElementId};

#[derive(Debug, Clone)]
pub struct HeroParallax {
    image: ElementId,
    factor: f64,
}

impl HeroParallax {
    pub fn register(doc: &Document, factor: f64) -> Option<Self> {
        Some(Self {
            image: doc.query(".hero img")?,
            factor,
        })
    }

    pub fn on_scroll(&self, doc: &mut Document) {
        let offset = doc.viewport().scroll_y * self.factor;
        doc.set_style(self.image, "transform", &format!("translateY({offset}px)"));
    }
}
