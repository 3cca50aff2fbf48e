use std::time::Duration;

use crate::{
    dom::{Document, ElementId},
    observer::{OneShotObserver, VisibilityRule},
    settings::{ms, ControllerSettings},
};

use super::{TimerTask, Timers};

pub const PROGRESS_BAR: &str = ".progress-bar";

fn progress_value(doc: &Document, bar: ElementId) -> Option<String> {
    doc.attr(bar, "aria-valuenow")
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Exposes each bar's target as `--progress-width` for the stylesheet.
pub fn preset_progress_widths(doc: &mut Document) {
    for bar in doc.query_all(PROGRESS_BAR) {
        if let Some(value) = progress_value(doc, bar) {
            doc.set_style(bar, "--progress-width", &format!("{value}%"));
        }
    }
}

/// Fills the skill bars one after another once their container shows up.
#[derive(Debug, Clone)]
pub struct SkillBars {
    observer: OneShotObserver<()>,
    stagger: Duration,
    shimmer_delay: Duration,
}

impl SkillBars {
    pub fn register(doc: &Document, settings: &ControllerSettings) -> Option<Self> {
        let container = doc.query(".skills-animation")?;
        let mut observer =
            OneShotObserver::new(VisibilityRule::new(settings.skills_threshold, 0.0));
        observer.observe(container, ());
        Some(Self {
            observer,
            stagger: ms(settings.skill_stagger_ms),
            shimmer_delay: ms(settings.shimmer_delay_ms),
        })
    }

    pub fn check(&mut self, doc: &mut Document, timers: &mut Timers) {
        for (container, ()) in self.observer.take_visible(doc) {
            doc.add_class(container, "animate");
            for (index, bar) in doc
                .query_all_within(container, PROGRESS_BAR)
                .into_iter()
                .enumerate()
            {
                let delay = self.stagger.saturating_mul(index as u32);
                timers.schedule(delay, TimerTask::FillBar(bar));
            }
        }
    }

    pub fn fill(&self, doc: &mut Document, timers: &mut Timers, bar: ElementId) {
        if let Some(value) = progress_value(doc, bar) {
            doc.set_style(bar, "width", &format!("{value}%"));
        }
        timers.schedule(self.shimmer_delay, TimerTask::Shimmer(bar));
    }

    pub fn shimmer(doc: &mut Document, bar: ElementId) {
        doc.add_class(bar, "shimmer-effect");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::Millis, dom::Element};

    #[test]
    fn presets_widths_for_every_bar() {
        let mut doc = Document::new("portfolio.test");
        let body = doc.body();
        let bar = doc.append(
            body,
            Element::new("div")
                .with_class("progress-bar")
                .with_attr("aria-valuenow", "85"),
        );
        let bare = doc.append(body, Element::new("div").with_class("progress-bar"));
        preset_progress_widths(&mut doc);
        assert_eq!(doc.style(bar, "--progress-width"), Some("85%"));
        assert_eq!(doc.style(bare, "--progress-width"), None);
    }

    #[test]
    fn staggers_fills_in_document_order() {
        let mut doc = Document::new("portfolio.test");
        let body = doc.body();
        let container = doc.append(
            body,
            Element::new("div")
                .with_class("skills-animation")
                .with_rect(0.0, 400.0),
        );
        let bars: Vec<_> = ["90", "75", "60"]
            .iter()
            .map(|v| {
                doc.append(
                    container,
                    Element::new("div")
                        .with_class("progress-bar")
                        .with_attr("aria-valuenow", v),
                )
            })
            .collect();

        let mut skills = SkillBars::register(&doc, &ControllerSettings::default()).expect("skills");
        let mut timers = Timers::default();
        skills.check(&mut doc, &mut timers);
        assert!(doc.has_class(container, "animate"));

        let mut fills = Vec::new();
        while let Some(task) = timers.pop_due(Millis(1000)) {
            fills.push((task, timers.now()));
        }
        assert_eq!(
            fills,
            vec![
                (TimerTask::FillBar(bars[0]), Millis(0)),
                (TimerTask::FillBar(bars[1]), Millis(200)),
                (TimerTask::FillBar(bars[2]), Millis(400)),
            ]
        );

        skills.check(&mut doc, &mut timers);
        assert_eq!(timers.pending(), 0);
    }
}
