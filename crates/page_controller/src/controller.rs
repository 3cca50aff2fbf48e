use std::time::Duration;

use shared::protocol::ContactSubmission;
use tracing::{debug, info, warn};

use crate::{
    behaviors::{
        counters::Counters,
        entrance::{BadgeEntrance, IconBounce},
        hover::HoverEffects,
        lazy_images::LazyImages,
        links::decorate_external_links,
        loading::{LoadSequence, Preloader},
        menu::MenuToggle,
        navigation::{AnchorScroll, NavSync},
        parallax::HeroParallax,
        reveal::Reveal,
        scroll_top::ScrollTop,
        skills::{preset_progress_widths, SkillBars},
        submit::SubmitFeedback,
        theme::ThemeToggle,
        touch::TouchGuard,
        typewriter::{Typewriter, TypingState},
        EventOutcome, TimerTask, Timers,
    },
    clock::Millis,
    dom::{Document, ElementId},
    rate_limit::Debounce,
    settings::{ms, ControllerSettings},
};

/// Owns the page and every behaviour bound to it. The host feeds it events
/// and advances its clock; timers only run inside [`PageController::advance`].
#[derive(Debug)]
pub struct PageController {
    doc: Document,
    timers: Timers,

    nav: Option<NavSync>,
    anchors: Option<AnchorScroll>,
    menu: Option<MenuToggle>,
    reveal: Option<Reveal>,
    skills: Option<SkillBars>,
    typewriter: Option<Typewriter>,
    counters: Option<Counters>,
    lazy_images: Option<LazyImages>,
    badges: Option<BadgeEntrance>,
    icons: Option<IconBounce>,
    parallax: Option<HeroParallax>,
    hover: Option<HoverEffects>,
    submit: Option<SubmitFeedback>,
    preloader: Option<Preloader>,
    theme: Option<ThemeToggle>,
    scroll_top: ScrollTop,
    load: LoadSequence,
    touch: TouchGuard,
    resize: Debounce,
    external_links: Vec<ElementId>,
}

impl PageController {
    pub fn mount(doc: Document) -> Self {
        Self::mount_with(doc, ControllerSettings::default())
    }

    pub fn mount_with(mut doc: Document, settings: ControllerSettings) -> Self {
        let mut timers = Timers::default();

        preset_progress_widths(&mut doc);
        let external_links = decorate_external_links(&mut doc);
        let scroll_top = ScrollTop::create(&mut doc, &settings);
        let theme = settings
            .theme_toggle
            .then(|| ThemeToggle::create(&mut doc));

        let typewriter = Typewriter::register(&doc, &settings);
        if let Some(typewriter) = &typewriter {
            typewriter.start(&mut timers, ms(settings.typing_start_ms));
        }
        timers.schedule(ms(settings.page_loaded_delay_ms), TimerTask::PageLoaded);

        let mut controller = Self {
            nav: NavSync::register(&doc, &settings),
            anchors: AnchorScroll::register(&doc, &settings),
            menu: MenuToggle::register(&doc),
            reveal: Reveal::register(&doc, &settings),
            skills: SkillBars::register(&doc, &settings),
            typewriter,
            counters: Counters::register(&doc, &settings),
            lazy_images: LazyImages::register(&doc),
            badges: BadgeEntrance::register(&doc, &settings),
            icons: IconBounce::register(&doc),
            parallax: HeroParallax::register(&doc, settings.parallax_factor),
            hover: HoverEffects::register(&doc),
            submit: SubmitFeedback::register(&doc, &settings),
            preloader: Preloader::register(&doc, &settings),
            theme,
            scroll_top,
            load: LoadSequence::new(&settings),
            touch: TouchGuard::new(ms(settings.double_tap_ms)),
            resize: Debounce::new(ms(settings.resize_debounce_ms)),
            external_links,
            doc,
            timers,
        };
        controller.check_visibility();

        info!(
            behaviors = ?controller.active_behaviors(),
            external_links = controller.external_links.len(),
            "page controller mounted"
        );
        controller
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// For hosts that reflow the page, e.g. after moving layout boxes.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn typing_state(&self) -> Option<&TypingState> {
        self.typewriter.as_ref().map(Typewriter::state)
    }

    pub fn scroll_top_button(&self) -> ElementId {
        self.scroll_top.button()
    }

    pub fn external_links(&self) -> &[ElementId] {
        &self.external_links
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|menu| menu.is_open(&self.doc))
    }

    /// Field values of the contact form, if the page has one.
    pub fn contact_submission(&self) -> Option<ContactSubmission> {
        self.submit.as_ref().map(|submit| submit.submission(&self.doc))
    }

    /// Names of the behaviours whose elements were found at mount.
    pub fn active_behaviors(&self) -> Vec<&'static str> {
        let flags = [
            ("nav-sync", self.nav.is_some()),
            ("anchor-scroll", self.anchors.is_some()),
            ("menu", self.menu.is_some()),
            ("reveal", self.reveal.is_some()),
            ("skills", self.skills.is_some()),
            ("typewriter", self.typewriter.is_some()),
            ("counters", self.counters.is_some()),
            ("lazy-images", self.lazy_images.is_some()),
            ("badges", self.badges.is_some()),
            ("icons", self.icons.is_some()),
            ("parallax", self.parallax.is_some()),
            ("hover", self.hover.is_some()),
            ("submit-feedback", self.submit.is_some()),
            ("preloader", self.preloader.is_some()),
            ("theme-toggle", self.theme.is_some()),
            ("scroll-top", true),
        ];
        flags
            .into_iter()
            .filter_map(|(name, active)| active.then_some(name))
            .collect()
    }

    pub fn scroll(&mut self, scroll_y: f64) {
        self.doc.set_scroll_y(scroll_y);
        let now = self.timers.now();
        if let Some(nav) = &mut self.nav {
            nav.on_scroll(&mut self.doc, now);
        }
        self.scroll_top.on_scroll(&mut self.doc, now);
        if let Some(parallax) = &self.parallax {
            parallax.on_scroll(&mut self.doc);
        }
        self.check_visibility();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.doc.set_viewport_size(width, height);
        let generation = self.resize.trigger();
        self.timers
            .schedule(self.resize.wait(), TimerTask::ResizeSettled(generation));
        self.check_visibility();
    }

    pub fn load(&mut self) {
        if !self.load.on_load(&mut self.doc, &mut self.timers) {
            return;
        }
        if let Some(preloader) = &self.preloader {
            preloader.on_load(&mut self.doc, &mut self.timers);
        }
    }

    pub fn click(&mut self, target: ElementId) -> EventOutcome {
        if !self.accepts(target, "click") {
            return EventOutcome::Default;
        }
        if let Some(menu) = &self.menu {
            menu.on_click(&mut self.doc, target);
        }
        if let Some(theme) = &self.theme {
            theme.on_click(&mut self.doc, target);
        }
        self.scroll_top.on_click(&mut self.doc, target);
        self.anchors
            .as_ref()
            .and_then(|anchors| anchors.on_click(&mut self.doc, target))
            .unwrap_or_default()
    }

    pub fn submit(&mut self, target: ElementId) -> EventOutcome {
        if !self.accepts(target, "submit") {
            return EventOutcome::Default;
        }
        self.submit
            .as_mut()
            .and_then(|submit| submit.on_submit(&mut self.doc, &mut self.timers, target))
            .unwrap_or_default()
    }

    pub fn pointer_enter(&mut self, target: ElementId) {
        if !self.accepts(target, "pointer enter") {
            return;
        }
        if let Some(hover) = &self.hover {
            hover.on_enter(&mut self.doc, target);
        }
    }

    pub fn pointer_leave(&mut self, target: ElementId) {
        if !self.accepts(target, "pointer leave") {
            return;
        }
        if let Some(hover) = &self.hover {
            hover.on_leave(&mut self.doc, target);
        }
    }

    pub fn touch_end(&mut self) -> EventOutcome {
        self.touch.on_touch_end(self.timers.now())
    }

    /// Hides an image that failed to load. Non-images are ignored.
    pub fn image_error(&mut self, image: ElementId) {
        if !self.accepts(image, "image error") || self.doc.element(image).tag() != "img" {
            return;
        }
        self.doc.set_style(image, "display", "none");
        warn!(
            src = self.doc.attr(image, "src").unwrap_or_default(),
            "image not found"
        );
    }

    pub fn visibility_changed(&mut self, hidden: bool) {
        if !hidden {
            info!("page visible");
        }
    }

    /// Moves the clock forward, running every timer that falls due on the
    /// way in due order. Timers scheduled by those tasks run too if they land
    /// inside the window.
    pub fn advance(&mut self, by: Duration) {
        let until = self.timers.now() + by;
        while let Some(task) = self.timers.pop_due(until) {
            self.run(task);
        }
        self.timers.set_now(until);
    }

    fn run(&mut self, task: TimerTask) {
        debug!(?task, now = self.timers.now().0, "timer fired");
        match task {
            TimerTask::PageLoaded => LoadSequence::page_loaded(&mut self.doc),
            TimerTask::TypeTick => {
                if let Some(typewriter) = &mut self.typewriter {
                    typewriter.tick(&mut self.doc, &mut self.timers);
                }
            }
            TimerTask::CursorOff => {
                if let Some(typewriter) = &self.typewriter {
                    typewriter.cursor_off(&mut self.doc);
                }
            }
            TimerTask::FillBar(bar) => {
                if let Some(skills) = &self.skills {
                    skills.fill(&mut self.doc, &mut self.timers, bar);
                }
            }
            TimerTask::Shimmer(bar) => SkillBars::shimmer(&mut self.doc, bar),
            TimerTask::CounterStep(counter, animation) => {
                if let Some(counters) = &self.counters {
                    counters.step(&mut self.doc, &mut self.timers, counter, animation);
                }
            }
            TimerTask::BadgeEntrance(badge) => BadgeEntrance::play(&mut self.doc, badge),
            TimerTask::SubmitSent => {
                if let Some(submit) = &self.submit {
                    submit.mark_sent(&mut self.doc, &mut self.timers);
                }
            }
            TimerTask::SubmitReset => {
                if let Some(submit) = &mut self.submit {
                    submit.reset(&mut self.doc);
                }
            }
            TimerTask::HeroFadeIn => LoadSequence::hero_fade_in(&mut self.doc),
            TimerTask::RemovePreloader => {
                if let Some(preloader) = &self.preloader {
                    preloader.remove(&mut self.doc);
                }
            }
            TimerTask::ResizeSettled(generation) => {
                if self.resize.fire(generation) {
                    if let Some(nav) = &self.nav {
                        nav.sync(&mut self.doc);
                    }
                }
            }
        }
    }

    /// Events aimed at elements this document never issued are dropped.
    fn accepts(&self, target: ElementId, event: &str) -> bool {
        let known = self.doc.knows(target);
        if !known {
            debug!(?target, event, "ignoring event for unknown element");
        }
        known
    }

    fn check_visibility(&mut self) {
        if let Some(reveal) = &mut self.reveal {
            reveal.check(&mut self.doc);
        }
        if let Some(skills) = &mut self.skills {
            skills.check(&mut self.doc, &mut self.timers);
        }
        if let Some(counters) = &mut self.counters {
            counters.check(&self.doc, &mut self.timers);
        }
        if let Some(lazy_images) = &mut self.lazy_images {
            lazy_images.check(&mut self.doc);
        }
        if let Some(badges) = &mut self.badges {
            badges.check(&self.doc, &mut self.timers);
        }
        if let Some(icons) = &mut self.icons {
            icons.check(&mut self.doc);
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
