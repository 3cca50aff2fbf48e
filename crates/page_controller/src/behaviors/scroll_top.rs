use crate::{
    clock::Millis,
    dom::{Document, Element, ElementId, ScrollBehavior},
    rate_limit::Throttle,
    settings::{ms, ControllerSettings},
};

pub(crate) const RESTING_SHADOW: &str = "0 5px 15px rgba(155, 89, 182, 0.3)";

const BUTTON_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "30px"),
    ("right", "30px"),
    ("width", "50px"),
    ("height", "50px"),
    (
        "background",
        "linear-gradient(135deg, #9b59b6 0%, #e8c5e8 100%)",
    ),
    ("color", "white"),
    ("border", "none"),
    ("border-radius", "50%"),
    ("font-size", "1.5rem"),
    ("cursor", "pointer"),
    ("opacity", "0"),
    ("visibility", "hidden"),
    ("transition", "all 0.3s ease"),
    ("z-index", "999"),
    ("box-shadow", RESTING_SHADOW),
];

/// The floating back-to-top button, injected at mount and shown once the
/// page is scrolled past the threshold.
#[derive(Debug, Clone)]
pub struct ScrollTop {
    button: ElementId,
    threshold: f64,
    throttle: Throttle,
}

impl ScrollTop {
    pub fn create(doc: &mut Document, settings: &ControllerSettings) -> Self {
        let body = doc.body();
        let button = doc.append(
            body,
            Element::new("button")
                .with_class("scroll-top-btn")
                .with_attr("aria-label", "Retour en haut"),
        );
        doc.append(button, Element::new("i").with_class("bi bi-arrow-up-short"));
        for (property, value) in BUTTON_STYLES {
            doc.set_style(button, property, value);
        }
        Self {
            button,
            threshold: settings.scroll_top_threshold_px,
            throttle: Throttle::new(ms(settings.scroll_throttle_ms)),
        }
    }

    pub fn button(&self) -> ElementId {
        self.button
    }

    pub fn on_scroll(&mut self, doc: &mut Document, now: Millis) -> bool {
        if !self.throttle.try_acquire(now) {
            return false;
        }
        let (opacity, visibility) = if doc.viewport().scroll_y > self.threshold {
            ("1", "visible")
        } else {
            ("0", "hidden")
        };
        doc.set_style(self.button, "opacity", opacity);
        doc.set_style(self.button, "visibility", visibility);
        true
    }

    /// True when the click landed on the button and scrolled the page.
    pub fn on_click(&self, doc: &mut Document, target: ElementId) -> bool {
        if !doc.contains(self.button, target) {
            return false;
        }
        doc.scroll_to(0.0, ScrollBehavior::Smooth);
        true
    }

    pub fn is_visible(&self, doc: &Document) -> bool {
        doc.style(self.button, "visibility") == Some("visible")
    }
}
