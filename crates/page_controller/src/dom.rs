//! In-memory document: element arena, layout boxes, viewport and the
//! per-origin preference store.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::selector::{Complex, SelectorList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

/// Vertical layout box in document coordinates (`offsetTop`, `clientHeight`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    rect: Rect,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attached: bool,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    /// Accepts a space separated class list, like the `class` attribute.
    pub fn with_class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_rect(mut self, top: f64, height: f64) -> Self {
        self.rect = Rect::new(top, height);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    body: ElementId,
    hostname: String,
    viewport: Viewport,
    scroll_requests: Vec<ScrollRequest>,
    preferences: BTreeMap<String, String>,
}

impl Document {
    pub fn new(hostname: &str) -> Self {
        let mut body = Element::new("body");
        body.attached = true;
        Self {
            elements: vec![body],
            body: ElementId(0),
            hostname: hostname.to_ascii_lowercase(),
            viewport: Viewport::default(),
            scroll_requests: Vec::new(),
            preferences: BTreeMap::new(),
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_scroll_y(&mut self, scroll_y: f64) {
        self.viewport.scroll_y = scroll_y.max(0.0);
    }

    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    /// Whether `id` was issued by this document.
    pub fn knows(&self, id: ElementId) -> bool {
        id.0 < self.elements.len()
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Creates a detached element.
    pub fn create(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            parent: None,
            children: Vec::new(),
            attached: false,
            ..element
        });
        id
    }

    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.detach(child);
        self.element_mut(child).parent = Some(parent);
        self.element_mut(parent).children.push(child);
        let attached = self.element(parent).attached;
        self.set_attached(child, attached);
    }

    /// `create` followed by `append_child`.
    pub fn append(&mut self, parent: ElementId, element: Element) -> ElementId {
        let id = self.create(element);
        self.append_child(parent, id);
        id
    }

    pub fn remove(&mut self, id: ElementId) {
        if id == self.body {
            return;
        }
        self.detach(id);
    }

    fn detach(&mut self, id: ElementId) {
        if let Some(parent) = self.element_mut(id).parent.take() {
            self.element_mut(parent).children.retain(|c| *c != id);
        }
        self.set_attached(id, false);
    }

    fn set_attached(&mut self, id: ElementId, attached: bool) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let element = self.element_mut(current);
            element.attached = attached;
            stack.extend(element.children.iter().copied());
        }
    }

    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.element(id).parent;
        }
        false
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).parent
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).has_class(class)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        self.element_mut(id).classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.element_mut(id).classes.remove(class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, id: ElementId, class: &str) -> bool {
        let classes = &mut self.element_mut(id).classes;
        if classes.remove(class) {
            false
        } else {
            classes.insert(class.to_string());
            true
        }
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id).attr(name)
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        self.element_mut(id)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, id: ElementId, name: &str) {
        self.element_mut(id).attributes.remove(name);
    }

    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.element(id).style(property)
    }

    pub fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        self.element_mut(id)
            .styles
            .insert(property.to_string(), value.to_string());
    }

    pub fn remove_style(&mut self, id: ElementId, property: &str) {
        self.element_mut(id).styles.remove(property);
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.element(id).text()
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        self.element_mut(id).text = text.to_string();
    }

    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        self.element_mut(id).rect = rect;
    }

    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_requests.push(ScrollRequest {
            top: top.max(0.0),
            behavior,
        });
    }

    /// Scroll requests issued since the last call, for the host to perform.
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }

    pub fn preference(&self, key: &str) -> Option<&str> {
        self.preferences.get(key).map(String::as_str)
    }

    pub fn set_preference(&mut self, key: &str, value: &str) {
        self.preferences.insert(key.to_string(), value.to_string());
    }

    /// Attached matches in document order. An invalid selector matches nothing.
    pub fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.query_all_within(self.body, selector)
    }

    pub fn query(&self, selector: &str) -> Option<ElementId> {
        self.query_all(selector).into_iter().next()
    }

    /// Matches among the descendants of `root`, excluding `root` itself.
    pub fn query_all_within(&self, root: ElementId, selector: &str) -> Vec<ElementId> {
        let list: SelectorList = match selector.parse() {
            Ok(list) => list,
            Err(error) => {
                warn!(selector, %error, "ignoring invalid selector");
                return Vec::new();
            }
        };

        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self.element(root).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.element(id).attached && list.0.iter().any(|c| self.matches(id, c)) {
                found.push(id);
            }
            stack.extend(self.element(id).children.iter().rev().copied());
        }
        found
    }

    pub fn query_within(&self, root: ElementId, selector: &str) -> Option<ElementId> {
        self.query_all_within(root, selector).into_iter().next()
    }

    fn matches(&self, id: ElementId, complex: &Complex) -> bool {
        let Some((subject, ancestors)) = complex.0.split_last() else {
            return false;
        };
        if !subject.matches(self.element(id)) {
            return false;
        }
        let mut current = self.element(id).parent;
        for compound in ancestors.iter().rev() {
            loop {
                let Some(ancestor) = current else {
                    return false;
                };
                current = self.element(ancestor).parent;
                if compound.matches(self.element(ancestor)) {
                    break;
                }
            }
        }
        true
    }
}
