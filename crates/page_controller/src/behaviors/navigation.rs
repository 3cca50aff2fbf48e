use crate::{
    clock::Millis,
    dom::{Document, ElementId, ScrollBehavior},
    rate_limit::Throttle,
    settings::{ms, ControllerSettings},
};

use super::EventOutcome;

pub const NAV_LINKS: &str = r##".navmenu a[href^="#"]"##;
pub const SECTIONS: &str = "section[id]";
pub const HASH_ANCHORS: &str = r##"a[href^="#"]"##;

/// Keeps the navigation link of the section under the reading line active.
#[derive(Debug, Clone)]
pub struct NavSync {
    sections: Vec<ElementId>,
    links: Vec<ElementId>,
    throttle: Throttle,
    offset: f64,
}

impl NavSync {
    pub fn register(doc: &Document, settings: &ControllerSettings) -> Option<Self> {
        let links = doc.query_all(NAV_LINKS);
        if links.is_empty() {
            return None;
        }
        Some(Self {
            sections: doc.query_all(SECTIONS),
            links,
            throttle: Throttle::new(ms(settings.scroll_throttle_ms)),
            offset: settings.nav_offset_px,
        })
    }

    /// Returns false when the call was swallowed by the throttle.
    pub fn on_scroll(&mut self, doc: &mut Document, now: Millis) -> bool {
        if !self.throttle.try_acquire(now) {
            return false;
        }
        self.sync(doc);
        true
    }

    pub fn sync(&self, doc: &mut Document) -> Option<String> {
        let position = doc.viewport().scroll_y + self.offset;
        let current = current_section(doc, &self.sections, position).map(str::to_string);
        let wanted = current.as_ref().map(|id| format!("#{id}"));

        for link in &self.links {
            doc.remove_class(*link, "active");
            if wanted.is_some() && doc.attr(*link, "href") == wanted.as_deref() {
                doc.add_class(*link, "active");
            }
        }
        current
    }
}

/// Id of the last section, in document order, whose span holds `position`.
pub fn current_section<'a>(
    doc: &'a Document,
    sections: &[ElementId],
    position: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .filter(|section| {
            let element = doc.element(**section);
            let rect = element.rect();
            element.is_attached() && position >= rect.top && position < rect.bottom()
        })
        .last()
        .and_then(|section| doc.attr(*section, "id"))
}

/// Smooth scrolling for in-page anchors.
#[derive(Debug, Clone)]
pub struct AnchorScroll {
    anchors: Vec<ElementId>,
    compact_width: f64,
    compact_offset: f64,
}

impl AnchorScroll {
    pub fn register(doc: &Document, settings: &ControllerSettings) -> Option<Self> {
        let anchors = doc.query_all(HASH_ANCHORS);
        if anchors.is_empty() {
            return None;
        }
        Some(Self {
            anchors,
            compact_width: settings.compact_viewport_px,
            compact_offset: settings.compact_anchor_offset_px,
        })
    }

    pub fn on_click(&self, doc: &mut Document, target: ElementId) -> Option<EventOutcome> {
        let anchor = self
            .anchors
            .iter()
            .copied()
            .find(|anchor| doc.contains(*anchor, target))?;
        let href = doc.attr(anchor, "href")?.to_string();

        if let Some(destination) = doc.query(&href) {
            let offset = if doc.viewport().width <= self.compact_width {
                self.compact_offset
            } else {
                0.0
            };
            let top = doc.element(destination).rect().top - offset;
            doc.scroll_to(top, ScrollBehavior::Smooth);
        }
        Some(EventOutcome::PreventDefault)
    }
}
