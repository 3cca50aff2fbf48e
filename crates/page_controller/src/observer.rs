use crate::dom::{Document, ElementId, Rect, Viewport};

/// When a target counts as visible: the fraction of its height inside the
/// viewport, after shrinking the viewport's bottom edge by `bottom_margin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityRule {
    pub threshold: f64,
    pub bottom_margin: f64,
}

impl VisibilityRule {
    /// Any overlap at all, like an observer created without options.
    pub const ANY: VisibilityRule = VisibilityRule {
        threshold: 0.0,
        bottom_margin: 0.0,
    };

    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold,
            bottom_margin,
        }
    }

    pub fn is_satisfied(&self, rect: Rect, viewport: Viewport) -> bool {
        let ratio = visible_ratio(rect, viewport, self.bottom_margin);
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }
}

pub fn visible_ratio(rect: Rect, viewport: Viewport, bottom_margin: f64) -> f64 {
    let view_top = viewport.scroll_y;
    let view_bottom = viewport.scroll_y + (viewport.height - bottom_margin).max(0.0);

    if rect.height <= 0.0 {
        return if rect.top >= view_top && rect.top < view_bottom {
            1.0
        } else {
            0.0
        };
    }

    let overlap = rect.bottom().min(view_bottom) - rect.top.max(view_top);
    (overlap.max(0.0) / rect.height).min(1.0)
}

/// Watches targets until each first satisfies the rule, then drops it. The
/// payload travels with the target to whoever applies the effect.
#[derive(Debug, Clone)]
pub struct OneShotObserver<T> {
    rule: VisibilityRule,
    pending: Vec<(ElementId, T)>,
}

impl<T> OneShotObserver<T> {
    pub fn new(rule: VisibilityRule) -> Self {
        Self {
            rule,
            pending: Vec::new(),
        }
    }

    pub fn observe(&mut self, target: ElementId, payload: T) {
        self.pending.push((target, payload));
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns, in observation order, every target that is now
    /// visible. Detached elements never fire.
    pub fn take_visible(&mut self, doc: &Document) -> Vec<(ElementId, T)> {
        let viewport = doc.viewport();
        let (fired, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|(target, _)| {
                    let element = doc.element(*target);
                    element.is_attached() && self.rule.is_satisfied(element.rect(), viewport)
                });
        self.pending = waiting;
        fired
    }
}
