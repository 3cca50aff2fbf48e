use crate::dom::{Document, Element, ElementId};

pub const THEME_KEY: &str = "theme";
const DARK_CLASS: &str = "dark-mode";
const MOON_ICON: &str = "bi bi-moon-stars";
const SUN_ICON: &str = "bi bi-sun";

const BUTTON_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "80px"),
    ("width", "45px"),
    ("height", "45px"),
    ("background", "rgba(255, 255, 255, 0.1)"),
    ("border", "1px solid rgba(255, 255, 255, 0.2)"),
    ("color", "white"),
    ("border-radius", "50%"),
    ("cursor", "pointer"),
    ("transition", "all 0.3s ease"),
    ("backdrop-filter", "blur(10px)"),
    ("z-index", "1000"),
];

/// Dark/light switch. The choice is stored under [`THEME_KEY`].
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    button: ElementId,
    icon: ElementId,
}

impl ThemeToggle {
    pub fn create(doc: &mut Document) -> Self {
        let body = doc.body();
        let button = doc.append(body, Element::new("button").with_class("theme-toggle"));
        let icon = doc.append(button, Element::new("i").with_class(MOON_ICON));
        for (property, value) in BUTTON_STYLES {
            doc.set_style(button, property, value);
        }

        let toggle = Self { button, icon };
        if doc.preference(THEME_KEY) == Some("dark") {
            doc.add_class(body, DARK_CLASS);
            toggle.show_icon(doc, true);
        }
        toggle
    }

    pub fn button(&self) -> ElementId {
        self.button
    }

    pub fn is_dark(doc: &Document) -> bool {
        doc.has_class(doc.body(), DARK_CLASS)
    }

    pub fn on_click(&self, doc: &mut Document, target: ElementId) -> bool {
        if !doc.contains(self.button, target) {
            return false;
        }
        let body = doc.body();
        let dark = doc.toggle_class(body, DARK_CLASS);
        self.show_icon(doc, dark);
        doc.set_preference(THEME_KEY, if dark { "dark" } else { "light" });
        true
    }

    fn show_icon(&self, doc: &mut Document, dark: bool) {
        let (from, to) = if dark {
            (MOON_ICON, SUN_ICON)
        } else {
            (SUN_ICON, MOON_ICON)
        };
        for class in from.split_whitespace() {
            doc.remove_class(self.icon, class);
        }
        for class in to.split_whitespace() {
            doc.add_class(self.icon, class);
        }
    }
}
