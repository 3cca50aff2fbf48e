use super::*;
use crate::dom::{Element, ScrollBehavior, ScrollRequest};

struct Page {
    doc: Document,
    nav_links: Vec<ElementId>,
    typed: ElementId,
    counter: ElementId,
    reveal: ElementId,
    skills: ElementId,
    bars: Vec<ElementId>,
    lazy: ElementId,
    github: ElementId,
    form: ElementId,
    submit: ElementId,
    card: ElementId,
}

fn portfolio() -> Page {
    let mut doc = Document::new("portfolio.test");
    let body = doc.body();

    let header = doc.append(body, Element::new("header").with_class("header"));
    doc.append(header, Element::new("i").with_class("header-toggle"));
    let nav = doc.append(header, Element::new("nav").with_class("navmenu"));
    let nav_links = ["hero", "about", "skills", "contact"]
        .iter()
        .map(|id| doc.append(nav, Element::new("a").with_attr("href", &format!("#{id}"))))
        .collect();

    let hero = doc.append(
        body,
        Element::new("section").with_id("hero").with_class("hero").with_rect(0.0, 800.0),
    );
    doc.append(hero, Element::new("img").with_attr("src", "assets/img/hero.webp"));
    doc.append(hero, Element::new("h2").with_text("Ingrid"));
    let typed = doc.append(hero, Element::new("span").with_class("typed"));

    let about = doc.append(
        body,
        Element::new("section").with_id("about").with_rect(800.0, 1000.0),
    );
    let counter = doc.append(
        about,
        Element::new("span")
            .with_class("counter")
            .with_attr("data-target", "50")
            .with_rect(1200.0, 40.0),
    );
    let reveal = doc.append(
        about,
        Element::new("div")
            .with_class("animate-on-scroll")
            .with_attr("data-delay", "200")
            .with_rect(1400.0, 200.0),
    );
    let card = doc.append(
        about,
        Element::new("div").with_class("project-card").with_rect(1500.0, 200.0),
    );

    let skills_section = doc.append(
        body,
        Element::new("section").with_id("skills").with_rect(1800.0, 1000.0),
    );
    let skills = doc.append(
        skills_section,
        Element::new("div")
            .with_class("skills-animation")
            .with_rect(1900.0, 300.0),
    );
    let bars = ["90", "70"]
        .iter()
        .map(|v| {
            doc.append(
                skills,
                Element::new("div")
                    .with_class("progress-bar")
                    .with_attr("aria-valuenow", v),
            )
        })
        .collect();
    let lazy = doc.append(
        skills_section,
        Element::new("img")
            .with_attr("data-src", "assets/img/projet.webp")
            .with_rect(2600.0, 100.0),
    );

    let contact = doc.append(
        body,
        Element::new("section").with_id("contact").with_rect(2800.0, 800.0),
    );
    let github = doc.append(
        contact,
        Element::new("a").with_attr("href", "https://github.com/ingrid"),
    );
    let form = doc.append(contact, Element::new("form").with_id("contact-form"));
    doc.append(
        form,
        Element::new("input")
            .with_attr("name", "nom")
            .with_attr("value", "Ingrid"),
    );
    let submit = doc.append(
        form,
        Element::new("button")
            .with_attr("type", "submit")
            .with_text("Envoyer"),
    );

    Page {
        doc,
        nav_links,
        typed,
        counter,
        reveal,
        skills,
        bars,
        lazy,
        github,
        form,
        submit,
        card,
    }
}

fn active_links(controller: &PageController, links: &[ElementId]) -> Vec<ElementId> {
    links
        .iter()
        .copied()
        .filter(|link| controller.document().has_class(*link, "active"))
        .collect()
}

#[test]
fn mounts_every_behavior_present_on_the_page() {
    let page = portfolio();
    let controller = PageController::mount(page.doc);
    let active = controller.active_behaviors();
    for name in [
        "nav-sync",
        "anchor-scroll",
        "menu",
        "reveal",
        "skills",
        "typewriter",
        "counters",
        "lazy-images",
        "parallax",
        "hover",
        "submit-feedback",
        "scroll-top",
    ] {
        assert!(active.contains(&name), "{name} missing from {active:?}");
    }
    assert!(!active.contains(&"theme-toggle"));
    assert!(!active.contains(&"preloader"));
    assert_eq!(controller.external_links(), &[page.github]);
    assert_eq!(
        controller.document().style(page.bars[0], "--progress-width"),
        Some("90%")
    );
}

#[test]
fn empty_page_keeps_only_injected_behaviors() {
    let mut controller = PageController::mount(Document::new("portfolio.test"));
    assert_eq!(controller.active_behaviors(), vec!["hover", "scroll-top"]);

    controller.scroll(500.0);
    controller.load();
    controller.resize(800.0, 600.0);
    let body = controller.document().body();
    assert_eq!(controller.click(body), EventOutcome::Default);
    assert_eq!(controller.submit(body), EventOutcome::Default);
    controller.advance(Duration::from_secs(5));
    assert!(controller.document().has_class(body, "page-loaded"));
    assert!(controller.typing_state().is_none());
}

#[test]
fn scroll_highlights_nav_once_per_throttle_window() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);

    controller.scroll(1000.0);
    assert_eq!(active_links(&controller, &page.nav_links), vec![page.nav_links[1]]);

    controller.advance(Duration::from_millis(50));
    controller.scroll(1700.0);
    assert_eq!(active_links(&controller, &page.nav_links), vec![page.nav_links[1]]);

    controller.advance(Duration::from_millis(50));
    controller.scroll(1700.0);
    assert_eq!(active_links(&controller, &page.nav_links), vec![page.nav_links[2]]);
}

#[test]
fn resize_settles_once_and_resyncs_nav() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);

    controller.document_mut().set_scroll_y(2700.0);
    controller.resize(1024.0, 700.0);
    controller.advance(Duration::from_millis(200));
    controller.resize(1000.0, 700.0);
    controller.advance(Duration::from_millis(200));
    assert!(active_links(&controller, &page.nav_links).is_empty());

    controller.advance(Duration::from_millis(50));
    assert_eq!(active_links(&controller, &page.nav_links), vec![page.nav_links[3]]);
}

#[test]
fn typewriter_types_first_word_after_start_delay() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);

    controller.advance(Duration::from_millis(999));
    assert_eq!(controller.document().text(page.typed), "");

    controller.advance(Duration::from_millis(1));
    assert_eq!(controller.document().text(page.typed), "É");
    assert_eq!(
        controller.document().style(page.typed, "border-right"),
        Some("2px solid white")
    );

    // "Étudiante" has nine characters: eight more ticks at 100 ms.
    controller.advance(Duration::from_millis(800));
    assert_eq!(controller.document().text(page.typed), "Étudiante");
    let state = controller.typing_state().expect("typing");
    assert!(state.is_deleting());
    assert_eq!(state.word_index(), 0);

    controller.advance(Duration::from_millis(500));
    assert_eq!(
        controller.document().style(page.typed, "border-right"),
        Some("2px solid transparent")
    );

    // Hold, then nine deletions at 50 ms.
    controller.advance(Duration::from_millis(1500 + 9 * 50));
    assert_eq!(controller.document().text(page.typed), "");
    assert_eq!(controller.typing_state().map(|s| s.word_index()), Some(1));

    controller.advance(Duration::from_millis(100));
    assert_eq!(controller.document().text(page.typed), "D");
}

#[test]
fn typewriter_text_is_always_a_word_prefix() {
    let page = portfolio();
    let words = ControllerSettings::default().typed_words;
    let mut controller = PageController::mount(page.doc);
    for _ in 0..2000 {
        controller.advance(Duration::from_millis(10));
        let state = controller.typing_state().expect("typing");
        assert!(state.char_index() <= state.current_word().chars().count());
        let text = controller.document().text(page.typed);
        assert!(words.iter().any(|word| word.starts_with(text)), "{text:?}");
    }
}

#[test]
fn counter_reaches_target_exactly_once_visible() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);

    controller.advance(Duration::from_secs(3));
    assert_eq!(controller.document().text(page.counter), "");

    controller.scroll(600.0);
    controller.advance(Duration::from_millis(30));
    assert_eq!(controller.document().text(page.counter), "1");

    controller.advance(Duration::from_millis(49 * 30));
    assert_eq!(controller.document().text(page.counter), "50");

    controller.scroll(0.0);
    controller.advance(Duration::from_millis(200));
    controller.scroll(600.0);
    controller.advance(Duration::from_secs(2));
    assert_eq!(controller.document().text(page.counter), "50");
}

#[test]
fn reveal_applies_delay_then_animates() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);
    assert!(!controller.document().has_class(page.reveal, "animated"));

    controller.scroll(700.0);
    assert!(controller.document().has_class(page.reveal, "animated"));
    assert_eq!(
        controller.document().style(page.reveal, "animation-delay"),
        Some("200ms")
    );
}

#[test]
fn skill_bars_fill_in_sequence_then_shimmer() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);

    controller.scroll(1300.0);
    assert!(controller.document().has_class(page.skills, "animate"));
    assert_eq!(controller.document().style(page.bars[0], "width"), None);

    controller.advance(Duration::ZERO);
    assert_eq!(controller.document().style(page.bars[0], "width"), Some("90%"));
    assert_eq!(controller.document().style(page.bars[1], "width"), None);

    controller.advance(Duration::from_millis(200));
    assert_eq!(controller.document().style(page.bars[1], "width"), Some("70%"));
    assert!(!controller.document().has_class(page.bars[0], "shimmer-effect"));

    controller.advance(Duration::from_millis(800));
    assert!(controller.document().has_class(page.bars[0], "shimmer-effect"));
    assert!(!controller.document().has_class(page.bars[1], "shimmer-effect"));

    controller.advance(Duration::from_millis(200));
    assert!(controller.document().has_class(page.bars[1], "shimmer-effect"));
}

#[test]
fn lazy_image_loads_on_first_view() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);
    assert_eq!(controller.document().attr(page.lazy, "src"), None);

    controller.scroll(2000.0);
    assert_eq!(
        controller.document().attr(page.lazy, "src"),
        Some("assets/img/projet.webp")
    );
    assert_eq!(controller.document().attr(page.lazy, "data-src"), None);
}

#[test]
fn submit_feedback_runs_on_the_clock() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);

    assert_eq!(controller.submit(page.form), EventOutcome::PreventDefault);
    assert_eq!(controller.document().text(page.submit), "Envoi en cours...");

    controller.advance(Duration::from_millis(2000));
    assert_eq!(controller.document().text(page.submit), "Message envoyé !");

    controller.advance(Duration::from_millis(2999));
    assert_eq!(controller.document().text(page.submit), "Message envoyé !");

    controller.advance(Duration::from_millis(1));
    assert_eq!(controller.document().text(page.submit), "Envoyer");
    assert_eq!(
        controller.contact_submission().and_then(|s| s.name),
        Some(String::new())
    );
}

#[test]
fn scroll_top_button_and_anchor_clicks() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);
    let button = controller.scroll_top_button();

    controller.scroll(400.0);
    assert_eq!(controller.document().style(button, "visibility"), Some("visible"));

    assert_eq!(controller.click(button), EventOutcome::Default);
    assert_eq!(
        controller.document_mut().take_scroll_requests(),
        vec![ScrollRequest {
            top: 0.0,
            behavior: ScrollBehavior::Smooth
        }]
    );

    controller.resize(1000.0, 800.0);
    assert_eq!(controller.click(page.nav_links[1]), EventOutcome::PreventDefault);
    assert_eq!(
        controller.document_mut().take_scroll_requests(),
        vec![ScrollRequest {
            top: 780.0,
            behavior: ScrollBehavior::Smooth
        }]
    );
}

#[test]
fn menu_closes_after_navigation_click() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);
    let toggle = controller.document().query(".header-toggle").expect("toggle");

    controller.click(toggle);
    assert!(controller.is_menu_open());
    controller.click(page.nav_links[0]);
    assert!(!controller.is_menu_open());
}

#[test]
fn hover_lifts_and_settles_cards() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);
    controller.pointer_enter(page.card);
    let lifted = controller.document().style(page.card, "transform").map(str::to_string);
    controller.pointer_leave(page.card);
    let settled = controller.document().style(page.card, "transform").map(str::to_string);
    assert!(lifted.is_some());
    assert_ne!(lifted, settled);
}

#[test]
fn load_adds_body_classes_and_fades_hero() {
    let mut page = portfolio();
    let body = page.doc.body();
    let preloader = page.doc.append(body, Element::new("div").with_id("preloader"));
    let mut controller = PageController::mount(page.doc);
    assert!(controller.active_behaviors().contains(&"preloader"));

    controller.load();
    assert!(controller.document().has_class(body, "loaded"));
    assert_eq!(controller.document().style(preloader, "opacity"), Some("0"));

    controller.advance(Duration::from_millis(100));
    assert!(controller.document().has_class(body, "page-loaded"));
    let heading = controller.document().query(".hero h2").expect("heading");
    assert!(controller.document().has_class(heading, "fade-in-up"));
    assert_eq!(controller.document().style(heading, "animation-delay"), Some("0s"));

    controller.advance(Duration::from_millis(400));
    assert!(controller.document().query("#preloader").is_none());
}

#[test]
fn double_tap_is_prevented() {
    let mut controller = PageController::mount(Document::new("portfolio.test"));
    assert_eq!(controller.touch_end(), EventOutcome::Default);
    controller.advance(Duration::from_millis(200));
    assert_eq!(controller.touch_end(), EventOutcome::PreventDefault);
    controller.advance(Duration::from_millis(400));
    assert_eq!(controller.touch_end(), EventOutcome::Default);
}

#[test]
fn broken_image_is_hidden() {
    let page = portfolio();
    let mut controller = PageController::mount(page.doc);
    let hero_image = controller.document().query(".hero img").expect("image");
    controller.image_error(hero_image);
    assert_eq!(controller.document().style(hero_image, "display"), Some("none"));

    controller.image_error(page.card);
    assert_eq!(controller.document().style(page.card, "display"), None);
}

#[test]
fn theme_toggle_is_opt_in() {
    let settings = ControllerSettings {
        theme_toggle: true,
        ..ControllerSettings::default()
    };
    let mut controller = PageController::mount_with(Document::new("portfolio.test"), settings);
    let button = controller.document().query(".theme-toggle").expect("toggle");
    controller.click(button);
    let body = controller.document().body();
    assert!(controller.document().has_class(body, "dark-mode"));
    assert_eq!(controller.document().preference("theme"), Some("dark"));
}

#[test]
fn events_for_unknown_elements_are_ignored() {
    let mut controller = PageController::mount(Document::new("portfolio.test"));
    let stranger = ElementId(10_000);
    assert_eq!(controller.click(stranger), EventOutcome::Default);
    assert_eq!(controller.submit(stranger), EventOutcome::Default);
    controller.pointer_enter(stranger);
    controller.pointer_leave(stranger);
    controller.image_error(stranger);
    assert!(!controller.document().knows(stranger));
}
