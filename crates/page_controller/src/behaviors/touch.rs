use std::time::Duration;

use crate::clock::Millis;

use super::EventOutcome;

/// Suppresses double-tap zoom: a touch end arriving within `window` of the
/// previous one is default-prevented.
#[derive(Debug, Clone)]
pub struct TouchGuard {
    last: Option<Millis>,
    window: Duration,
}

impl TouchGuard {
    pub fn new(window: Duration) -> Self {
        Self { last: None, window }
    }

    pub fn on_touch_end(&mut self, now: Millis) -> EventOutcome {
        let too_soon = self.last.is_some_and(|last| now <= last + self.window);
        self.last = Some(now);
        if too_soon {
            EventOutcome::PreventDefault
        } else {
            EventOutcome::Default
        }
    }
}
