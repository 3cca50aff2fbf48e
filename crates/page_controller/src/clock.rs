//! Virtual millisecond clock with an ordered timer queue, standing in for the
//! browser's `setTimeout` loop.

use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    ops::Add,
    time::Duration,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millis(pub u64);

impl Add<Duration> for Millis {
    type Output = Millis;

    fn add(self, rhs: Duration) -> Millis {
        let delta = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Millis(self.0.saturating_add(delta))
    }
}

#[derive(Debug)]
struct Timer<T> {
    due: Millis,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Timer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Timer<T> {}

impl<T> PartialOrd for Timer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap pops the earliest timer; ties keep insertion order.
impl<T> Ord for Timer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Millis,
    next_seq: u64,
    queue: BinaryHeap<Timer<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Millis::default(),
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, task: T) {
        let timer = Timer {
            due: self.now + delay,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.queue.push(timer);
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Millis) -> Option<T> {
        if self.queue.peek()?.due > until {
            return None;
        }
        let timer = self.queue.pop()?;
        self.now = self.now.max(timer.due);
        Some(timer.task)
    }

    pub fn set_now(&mut self, now: Millis) {
        self.now = self.now.max(now);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
