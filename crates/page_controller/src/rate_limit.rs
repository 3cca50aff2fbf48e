use std::time::Duration;

use crate::clock::Millis;

/// Lets one call through, then drops every call until `window` has elapsed.
/// Dropped calls are not replayed.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    blocked_until: Option<Millis>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            blocked_until: None,
        }
    }

    pub fn try_acquire(&mut self, now: Millis) -> bool {
        if self.blocked_until.is_some_and(|until| now < until) {
            return false;
        }
        self.blocked_until = Some(now + self.window);
        true
    }
}

/// Defers a call until no trigger has arrived for `wait`. Each trigger hands
/// out a new generation and invalidates the previous one.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    generation: u64,
    armed: bool,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            generation: 0,
            armed: false,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn trigger(&mut self) -> u64 {
        self.generation += 1;
        self.armed = true;
        self.generation
    }

    /// True only for the latest generation, and only once.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.armed && generation == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }
}
