use std::time::Duration;

use crate::{
    dom::{Document, ElementId},
    observer::{OneShotObserver, VisibilityRule},
    settings::{ms, ControllerSettings},
};

use super::{TimerTask, Timers};

pub const ICON_TARGETS: &str = ".project-icon, .info-item .icon, .interests .fs-2";

/// Tech badges fade in one after another when they first come into view.
#[derive(Debug, Clone)]
pub struct BadgeEntrance {
    observer: OneShotObserver<u32>,
    stagger: Duration,
}

impl BadgeEntrance {
    pub fn register(doc: &Document, settings: &ControllerSettings) -> Option<Self> {
        let badges = doc.query_all(".tech-badge");
        if badges.is_empty() {
            return None;
        }
        let mut observer = OneShotObserver::new(VisibilityRule::ANY);
        for (index, badge) in badges.into_iter().enumerate() {
            observer.observe(badge, index as u32);
        }
        Some(Self {
            observer,
            stagger: ms(settings.badge_stagger_ms),
        })
    }

    pub fn check(&mut self, doc: &Document, timers: &mut Timers) {
        for (badge, index) in self.observer.take_visible(doc) {
            timers.schedule(
                self.stagger.saturating_mul(index),
                TimerTask::BadgeEntrance(badge),
            );
        }
    }

    pub fn play(doc: &mut Document, badge: ElementId) {
        doc.set_style(badge, "animation", "fadeInUp 0.6s ease forwards");
    }
}

#[derive(Debug, Clone)]
pub struct IconBounce {
    observer: OneShotObserver<()>,
}

impl IconBounce {
    pub fn register(doc: &Document) -> Option<Self> {
        let icons = doc.query_all(ICON_TARGETS);
        if icons.is_empty() {
            return None;
        }
        let mut observer = OneShotObserver::new(VisibilityRule::ANY);
        for icon in icons {
            observer.observe(icon, ());
        }
        Some(Self { observer })
    }

    pub fn check(&mut self, doc: &mut Document) -> usize {
        let visible = self.observer.take_visible(doc);
        for (icon, ()) in &visible {
            doc.set_style(*icon, "animation", "bounceIn 1s ease");
        }
        visible.len()
    }
}
