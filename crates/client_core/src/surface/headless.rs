use std::{cell::RefCell, collections::HashMap};

use shared::{
    domain::{AnimatedIndex, ElementRef, SectionBounds, Viewport},
    protocol::{DomPatch, Schedule, Task},
};

use super::Surface;

/// In-memory document that records everything the page does to it.
#[derive(Debug)]
pub struct HeadlessSurface {
    scroll_y: RefCell<f64>,
    viewport: RefCell<Viewport>,
    sections: RefCell<Vec<SectionBounds>>,
    nav_link_hrefs: Vec<String>,
    texts: HashMap<ElementRef, String>,
    animated_children: Vec<usize>,
    patches: RefCell<Vec<DomPatch>>,
    scheduled: RefCell<Vec<(Schedule, Task)>>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self {
            scroll_y: RefCell::new(0.0),
            viewport: RefCell::new(Viewport {
                width: 1280.0,
                height: 900.0,
            }),
            sections: RefCell::new(Vec::new()),
            nav_link_hrefs: Vec::new(),
            texts: HashMap::new(),
            animated_children: Vec::new(),
            patches: RefCell::new(Vec::new()),
            scheduled: RefCell::new(Vec::new()),
        }
    }
}

impl HeadlessSurface {
    pub fn with_viewport(self, width: f64, height: f64) -> Self {
        *self.viewport.borrow_mut() = Viewport { width, height };
        self
    }

    pub fn with_sections(self, sections: Vec<SectionBounds>) -> Self {
        *self.sections.borrow_mut() = sections;
        self
    }

    pub fn with_nav_links<I, S>(mut self, hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nav_link_hrefs = hrefs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_text(mut self, target: ElementRef, text: impl Into<String>) -> Self {
        self.texts.insert(target, text.into());
        self
    }

    /// One entry per animated element, holding its eligible child count.
    pub fn with_animated(mut self, children: Vec<usize>) -> Self {
        self.animated_children = children;
        self
    }

    pub fn set_scroll_y(&self, offset: f64) {
        *self.scroll_y.borrow_mut() = offset;
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.viewport.borrow_mut().width = width;
    }

    pub fn patches(&self) -> Vec<DomPatch> {
        self.patches.borrow().clone()
    }

    pub fn take_patches(&self) -> Vec<DomPatch> {
        std::mem::take(&mut *self.patches.borrow_mut())
    }

    pub fn scheduled(&self) -> Vec<(Schedule, Task)> {
        self.scheduled.borrow().clone()
    }

    pub fn take_scheduled(&self) -> Vec<(Schedule, Task)> {
        std::mem::take(&mut *self.scheduled.borrow_mut())
    }

    /// Last value written to `property` on `target`, if any.
    pub fn style_of(&self, target: &ElementRef, property: &str) -> Option<String> {
        self.patches.borrow().iter().rev().find_map(|patch| match patch {
            DomPatch::SetStyle {
                target: patched,
                property: patched_property,
                value,
            } if patched == target && *patched_property == property => Some(value.clone()),
            _ => None,
        })
    }

    /// Whether `class` is currently present on `target`, replaying every patch.
    pub fn has_class(&self, target: &ElementRef, class: &str) -> bool {
        self.patches
            .borrow()
            .iter()
            .fold(false, |present, patch| match patch {
                DomPatch::SetClass {
                    target: patched,
                    class: patched_class,
                    enabled,
                } if patched == target && *patched_class == class => *enabled,
                _ => present,
            })
    }
}

impl Surface for HeadlessSurface {
    fn scroll_y(&self) -> f64 {
        *self.scroll_y.borrow()
    }

    fn viewport(&self) -> Viewport {
        *self.viewport.borrow()
    }

    fn sections(&self) -> Vec<SectionBounds> {
        self.sections.borrow().clone()
    }

    fn nav_link_hrefs(&self) -> Vec<String> {
        self.nav_link_hrefs.clone()
    }

    fn text_of(&self, target: &ElementRef) -> Option<String> {
        self.texts.get(target).cloned()
    }

    fn animated_count(&self) -> usize {
        self.animated_children.len()
    }

    fn animated_children(&self, parent: AnimatedIndex) -> usize {
        self.animated_children.get(parent.0).copied().unwrap_or(0)
    }

    fn apply(&self, patch: DomPatch) {
        self.patches.borrow_mut().push(patch);
    }

    fn schedule(&self, when: Schedule, task: Task) {
        self.scheduled.borrow_mut().push((when, task));
    }
}
