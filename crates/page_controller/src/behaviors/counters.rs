use std::time::Duration;

use tracing::warn;

use crate::{
    dom::{Document, ElementId},
    observer::{OneShotObserver, VisibilityRule},
    settings::{ms, ControllerSettings},
};

use super::{TimerTask, Timers};

/// A count-up from zero to `target` in `steps` equal increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: i64,
    step: u32,
    steps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, steps: u32) -> Self {
        Self {
            target,
            step: 0,
            steps: steps.max(1),
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// The last frame always shows the exact target.
    pub fn advance(&mut self) -> CounterFrame {
        self.step = (self.step + 1).min(self.steps);
        let value = (i128::from(self.target) * i128::from(self.step))
            .div_euclid(i128::from(self.steps));
        CounterFrame {
            value: value as i64,
            done: self.step == self.steps,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Counters {
    observer: OneShotObserver<()>,
    steps: u32,
    interval: Duration,
}

impl Counters {
    pub fn register(doc: &Document, settings: &ControllerSettings) -> Option<Self> {
        let counters = doc.query_all(".counter");
        if counters.is_empty() {
            return None;
        }
        let mut observer = OneShotObserver::new(VisibilityRule::ANY);
        for counter in counters {
            observer.observe(counter, ());
        }
        Some(Self {
            observer,
            steps: settings.counter_steps,
            interval: ms(settings.counter_interval_ms),
        })
    }

    pub fn check(&mut self, doc: &Document, timers: &mut Timers) {
        for (counter, ()) in self.observer.take_visible(doc) {
            let raw = doc.attr(counter, "data-target").unwrap_or_default().trim();
            match raw.parse::<i64>() {
                Ok(target) => timers.schedule(
                    self.interval,
                    TimerTask::CounterStep(counter, CounterAnimation::new(target, self.steps)),
                ),
                Err(error) => warn!(?counter, raw, %error, "counter has no usable data-target"),
            }
        }
    }

    pub fn step(
        &self,
        doc: &mut Document,
        timers: &mut Timers,
        counter: ElementId,
        mut animation: CounterAnimation,
    ) {
        let frame = animation.advance();
        doc.set_text(counter, &frame.value.to_string());
        if !frame.done {
            timers.schedule(self.interval, TimerTask::CounterStep(counter, animation));
        }
    }
}
