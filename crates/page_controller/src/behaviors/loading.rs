use std::time::Duration;

use crate::{
    dom::{Document, ElementId},
    settings::{ms, ControllerSettings},
};

use super::{TimerTask, Timers};

/// Fades the `#preloader` overlay out on window load, then drops it.
#[derive(Debug, Clone)]
pub struct Preloader {
    element: ElementId,
    fade: Duration,
}

impl Preloader {
    pub fn register(doc: &Document, settings: &ControllerSettings) -> Option<Self> {
        Some(Self {
            element: doc.query("#preloader")?,
            fade: ms(settings.preloader_fade_ms),
        })
    }

    pub fn on_load(&self, doc: &mut Document, timers: &mut Timers) {
        doc.set_style(self.element, "opacity", "0");
        doc.set_style(self.element, "visibility", "hidden");
        timers.schedule(self.fade, TimerTask::RemovePreloader);
    }

    pub fn remove(&self, doc: &mut Document) {
        doc.remove(self.element);
    }
}

/// Body classes and the hero fade-in that follow window load.
#[derive(Debug, Clone)]
pub struct LoadSequence {
    loaded: bool,
    hero_delay: Duration,
}

impl LoadSequence {
    pub fn new(settings: &ControllerSettings) -> Self {
        Self {
            loaded: false,
            hero_delay: ms(settings.hero_fade_delay_ms),
        }
    }

    /// False when load was already handled.
    pub fn on_load(&mut self, doc: &mut Document, timers: &mut Timers) -> bool {
        if std::mem::replace(&mut self.loaded, true) {
            return false;
        }
        let body = doc.body();
        doc.add_class(body, "loaded");
        timers.schedule(self.hero_delay, TimerTask::HeroFadeIn);
        true
    }

    pub fn hero_fade_in(doc: &mut Document) {
        for (index, element) in doc.query_all(".hero h2, .hero p").into_iter().enumerate() {
            let delay = index as f64 * 0.3;
            // Rounded so 0.3 * 3 prints as 0.9 and not 0.8999999999999999.
            let delay = (delay * 1000.0).round() / 1000.0;
            doc.set_style(element, "animation-delay", &format!("{delay}s"));
            doc.add_class(element, "fade-in-up");
        }
    }

    pub fn page_loaded(doc: &mut Document) {
        let body = doc.body();
        doc.add_class(body, "page-loaded");
    }
}
