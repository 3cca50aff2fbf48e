use super::scroll_top::RESTING_SHADOW;
use crate::dom::{Document, ElementId};

const REST_SHADOW: &str = "0 5px 15px rgba(155, 89, 182, 0.1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    pub enter_transform: &'static str,
    pub enter_shadow: &'static str,
    pub leave_transform: &'static str,
    pub leave_shadow: &'static str,
}

const HOVER_STYLES: &[(&str, HoverStyle)] = &[
    (
        ".project-card",
        HoverStyle {
            enter_transform: "translateY(-15px) scale(1.02)",
            enter_shadow: "0 20px 40px rgba(155, 89, 182, 0.2)",
            leave_transform: "translateY(0) scale(1)",
            leave_shadow: REST_SHADOW,
        },
    ),
    (
        ".resume-item",
        HoverStyle {
            enter_transform: "translateX(15px) scale(1.02)",
            enter_shadow: "0 15px 30px rgba(155, 89, 182, 0.15)",
            leave_transform: "translateX(0) scale(1)",
            leave_shadow: REST_SHADOW,
        },
    ),
    (
        ".info-item",
        HoverStyle {
            enter_transform: "translateY(-8px) scale(1.02)",
            enter_shadow: "0 15px 30px rgba(155, 89, 182, 0.15)",
            leave_transform: "translateY(0) scale(1)",
            leave_shadow: REST_SHADOW,
        },
    ),
    (
        ".tech-badge",
        HoverStyle {
            enter_transform: "scale(1.1) rotateY(10deg)",
            enter_shadow: "0 5px 15px rgba(155, 89, 182, 0.3)",
            leave_transform: "scale(1) rotateY(0deg)",
            leave_shadow: "none",
        },
    ),
    (
        ".scroll-top-btn",
        HoverStyle {
            enter_transform: "translateY(-5px) scale(1.1)",
            enter_shadow: "0 8px 25px rgba(155, 89, 182, 0.4)",
            leave_transform: "translateY(0) scale(1)",
            leave_shadow: RESTING_SHADOW,
        },
    ),
];

/// Pointer enter/leave lift for cards, badges and the scroll-to-top button.
#[derive(Debug, Clone)]
pub struct HoverEffects {
    targets: Vec<(ElementId, HoverStyle)>,
}

impl HoverEffects {
    pub fn register(doc: &Document) -> Option<Self> {
        let targets: Vec<_> = HOVER_STYLES
            .iter()
            .flat_map(|(selector, style)| {
                doc.query_all(selector)
                    .into_iter()
                    .map(move |element| (element, *style))
            })
            .collect();
        if targets.is_empty() {
            None
        } else {
            Some(Self { targets })
        }
    }

    pub fn on_enter(&self, doc: &mut Document, target: ElementId) -> bool {
        self.apply(doc, target, |s| (s.enter_transform, s.enter_shadow))
    }

    pub fn on_leave(&self, doc: &mut Document, target: ElementId) -> bool {
        self.apply(doc, target, |s| (s.leave_transform, s.leave_shadow))
    }

    fn apply(
        &self,
        doc: &mut Document,
        target: ElementId,
        pick: impl Fn(&HoverStyle) -> (&'static str, &'static str),
    ) -> bool {
        let mut applied = false;
        for (element, style) in &self.targets {
            if *element == target {
                let (transform, shadow) = pick(style);
                doc.set_style(target, "transform", transform);
                doc.set_style(target, "box-shadow", shadow);
                applied = true;
            }
        }
        applied
    }
}
