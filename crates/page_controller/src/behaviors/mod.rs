//! One module per page behaviour. Each exposes a `register` step that returns
//! `None` when the elements it needs are absent, so a missing element just
//! disables that behaviour.

pub mod counters;
pub mod entrance;
pub mod hover;
pub mod lazy_images;
pub mod links;
pub mod loading;
pub mod menu;
pub mod navigation;
pub mod parallax;
pub mod reveal;
pub mod scroll_top;
pub mod skills;
pub mod submit;
pub mod theme;
pub mod touch;
pub mod typewriter;

use crate::{clock::Scheduler, dom::ElementId};

use counters::CounterAnimation;

/// Work deferred on the virtual clock. Animation state rides along in the
/// task rather than in shared variables.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerTask {
    PageLoaded,
    TypeTick,
    CursorOff,
    FillBar(ElementId),
    Shimmer(ElementId),
    CounterStep(ElementId, CounterAnimation),
    BadgeEntrance(ElementId),
    SubmitSent,
    SubmitReset,
    HeroFadeIn,
    RemovePreloader,
    ResizeSettled(u64),
}

pub type Timers = Scheduler<TimerTask>;

/// Whether the host should run the browser's default action for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventOutcome {
    #[default]
    Default,
    PreventDefault,
}
