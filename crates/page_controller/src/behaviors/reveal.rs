use tracing::debug;

use crate::{
    dom::{Document, ElementId},
    observer::{OneShotObserver, VisibilityRule},
    settings::ControllerSettings,
};

pub const REVEAL_TARGETS: &str = ".animate-on-scroll";

/// Entrance animation for `.animate-on-scroll` elements, applied once.
#[derive(Debug, Clone)]
pub struct Reveal {
    observer: OneShotObserver<()>,
}

impl Reveal {
    pub fn register(doc: &Document, settings: &ControllerSettings) -> Option<Self> {
        let targets = doc.query_all(REVEAL_TARGETS);
        if targets.is_empty() {
            return None;
        }
        let mut observer = OneShotObserver::new(VisibilityRule::new(
            settings.reveal_threshold,
            settings.reveal_bottom_margin_px,
        ));
        for target in targets {
            observer.observe(target, ());
        }
        Some(Self { observer })
    }

    pub fn check(&mut self, doc: &mut Document) -> usize {
        let fired = self.observer.take_visible(doc);
        for (target, ()) in &fired {
            reveal(doc, *target);
        }
        fired.len()
    }
}

fn reveal(doc: &mut Document, target: ElementId) {
    let delay = doc
        .attr(target, "data-delay")
        .map(|raw| raw.trim().parse::<u64>());
    match delay {
        Some(Ok(delay)) => doc.set_style(target, "animation-delay", &format!("{delay}ms")),
        Some(Err(error)) => debug!(?target, %error, "ignoring unparseable data-delay"),
        None => {}
    }
    doc.add_class(target, "animated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    #[test]
    fn reveals_once_with_delay_applied() {
        let mut doc = Document::new("portfolio.test");
        let body = doc.body();
        let card = doc.append(
            body,
            Element::new("div")
                .with_class("animate-on-scroll")
                .with_attr("data-delay", "200")
                .with_rect(1000.0, 200.0),
        );
        let mut reveal = Reveal::register(&doc, &ControllerSettings::default()).expect("reveal");

        assert_eq!(reveal.check(&mut doc), 0);
        assert!(!doc.has_class(card, "animated"));

        // 10% of 200px must clear a viewport bottom of scroll + 800 - 50.
        doc.set_scroll_y(269.0);
        assert_eq!(reveal.check(&mut doc), 0);
        doc.set_scroll_y(270.0);
        assert_eq!(reveal.check(&mut doc), 1);
        assert!(doc.has_class(card, "animated"));
        assert_eq!(doc.style(card, "animation-delay"), Some("200ms"));

        doc.remove_class(card, "animated");
        assert_eq!(reveal.check(&mut doc), 0);
        assert!(!doc.has_class(card, "animated"));
    }

    #[test]
    fn bad_delay_still_reveals() {
        let mut doc = Document::new("portfolio.test");
        let body = doc.body();
        let card = doc.append(
            body,
            Element::new("div")
                .with_class("animate-on-scroll")
                .with_attr("data-delay", "soon")
                .with_rect(0.0, 100.0),
        );
        let mut reveal = Reveal::register(&doc, &ControllerSettings::default()).expect("reveal");
        reveal.check(&mut doc);
        assert!(doc.has_class(card, "animated"));
        assert_eq!(doc.style(card, "animation-delay"), None);
    }
}
