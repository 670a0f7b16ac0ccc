use std::cell::RefCell;

use client_core::Surface;
use shared::{
    domain::{AnimatedIndex, ElementRef, MessageKind, SectionBounds, Viewport},
    protocol::{DomPatch, Schedule, Task},
};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlButtonElement, HtmlElement, IntersectionObserver, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use super::Elements;
use crate::markup::{
    form_message_class, form_message_style, SECTION_SELECTOR, TYPING_CURSOR_CLASS,
    TYPING_CURSOR_TEXT,
};

/// The live document as a `Surface`.
///
/// Patches are applied immediately; scheduled tasks are queued until the
/// runtime arms them, so no page borrow is held when a timer fires.
pub struct WebSurface {
    window: Window,
    elements: Elements,
    observer: RefCell<Option<IntersectionObserver>>,
    form_message: RefCell<Option<HtmlElement>>,
    scheduled: RefCell<Vec<(Schedule, Task)>>,
}

impl WebSurface {
    pub fn new(window: Window, elements: Elements) -> Self {
        Self {
            window,
            elements,
            observer: RefCell::new(None),
            form_message: RefCell::new(None),
            scheduled: RefCell::new(Vec::new()),
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    pub fn set_observer(&self, observer: IntersectionObserver) {
        *self.observer.borrow_mut() = Some(observer);
    }

    pub fn take_scheduled(&self) -> Vec<(Schedule, Task)> {
        std::mem::take(&mut *self.scheduled.borrow_mut())
    }

    fn resolve(&self, target: &ElementRef) -> Option<HtmlElement> {
        match target {
            ElementRef::FormMessage => self.form_message.borrow().clone(),
            other => self.elements.resolve(other),
        }
    }

    fn apply_patch(&self, patch: DomPatch) -> Result<(), JsValue> {
        match patch {
            DomPatch::SetClass {
                target,
                class,
                enabled,
            } => {
                if let Some(el) = self.resolve(&target) {
                    el.class_list().toggle_with_force(class, enabled)?;
                }
            }
            DomPatch::SetStyle {
                target,
                property,
                value,
            } => {
                if let Some(el) = self.resolve(&target) {
                    el.style().set_property(property, &value)?;
                }
            }
            DomPatch::SetAttribute {
                target,
                name,
                value,
            } => {
                if let Some(el) = self.resolve(&target) {
                    el.set_attribute(name, &value)?;
                }
            }
            DomPatch::SetText { target, text } => {
                if let Some(el) = self.resolve(&target) {
                    el.set_text_content(Some(&text));
                }
            }
            DomPatch::AppendText { target, text } => {
                if let Some(el) = self.resolve(&target) {
                    el.append_with_str_1(&text)?;
                }
            }
            DomPatch::ShowTypingCursor { target } => {
                if let Some(el) = self.resolve(&target) {
                    let cursor = self.elements.document.create_element("span")?;
                    cursor.set_class_name(TYPING_CURSOR_CLASS);
                    cursor.set_text_content(Some(TYPING_CURSOR_TEXT));
                    el.append_child(&cursor)?;
                }
            }
            DomPatch::RemoveTypingCursor { target } => {
                if let Some(el) = self.resolve(&target) {
                    if let Some(cursor) = el.query_selector(&format!(".{TYPING_CURSOR_CLASS}"))? {
                        cursor.remove();
                    }
                }
            }
            DomPatch::SetControl {
                target,
                disabled,
                label,
            } => {
                if let Some(button) = self
                    .resolve(&target)
                    .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
                {
                    button.set_disabled(disabled);
                    button.set_text_content(Some(&label));
                }
            }
            DomPatch::ShowFormMessage { kind, text } => self.show_form_message(kind, &text)?,
            DomPatch::FadeFormMessage => {
                if let Some(message) = self.form_message.borrow().as_ref() {
                    message.style().set_property("opacity", "0")?;
                }
            }
            DomPatch::RemoveFormMessage => {
                if let Some(message) = self.form_message.borrow_mut().take() {
                    message.remove();
                }
            }
            DomPatch::ResetForm => {
                if let Some(form) = &self.elements.contact_form {
                    form.reset();
                }
            }
            DomPatch::Alert(text) => self.window.alert_with_message(&text)?,
            DomPatch::Navigate(uri) => self.window.location().set_href(&uri)?,
            DomPatch::ScrollIntoView(target) => {
                if let Some(el) = self.resolve(&target) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    el.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            DomPatch::Observe(target) => {
                let observer = self.observer.borrow();
                match (observer.as_ref(), self.resolve(&target)) {
                    (Some(observer), Some(el)) => observer.observe(&el),
                    (None, _) => debug!(?target, "no intersection observer; skipping"),
                    (_, None) => {}
                }
            }
        }
        Ok(())
    }

    /// Replaces any visible message with a new one at the top of the form.
    fn show_form_message(&self, kind: MessageKind, text: &str) -> Result<(), JsValue> {
        let Some(form) = &self.elements.contact_form else {
            return Ok(());
        };
        if let Some(previous) = self.form_message.borrow_mut().take() {
            previous.remove();
        }

        let message: HtmlElement = self
            .elements
            .document
            .create_element("div")?
            .dyn_into()?;
        message.set_class_name(&form_message_class(kind));
        message.set_attribute("style", &form_message_style(kind))?;
        message.set_text_content(Some(text));
        form.insert_before(&message, form.first_child().as_ref())?;

        *self.form_message.borrow_mut() = Some(message);
        Ok(())
    }
}

impl Surface for WebSurface {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport(&self) -> Viewport {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport {
            width: dimension(self.window.inner_width()),
            height: dimension(self.window.inner_height()),
        }
    }

    fn sections(&self) -> Vec<SectionBounds> {
        let Ok(nodes) = self.elements.document.query_selector_all(SECTION_SELECTOR) else {
            return Vec::new();
        };
        let scroll_y = self.scroll_y();
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(|section| {
                let rect = section.get_bounding_client_rect();
                SectionBounds::new(section.id(), rect.top() + scroll_y, rect.height())
            })
            .collect()
    }

    fn nav_link_hrefs(&self) -> Vec<String> {
        self.elements
            .nav_links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect()
    }

    fn text_of(&self, target: &ElementRef) -> Option<String> {
        self.resolve(target).and_then(|el| el.text_content())
    }

    fn animated_count(&self) -> usize {
        self.elements.animated.len()
    }

    fn animated_children(&self, parent: AnimatedIndex) -> usize {
        self.elements
            .animated_children
            .get(parent.0)
            .map_or(0, Vec::len)
    }

    fn apply(&self, patch: DomPatch) {
        if let Err(err) = self.apply_patch(patch) {
            warn!(error = ?err, "dom patch failed");
        }
    }

    fn schedule(&self, when: Schedule, task: Task) {
        self.scheduled.borrow_mut().push((when, task));
    }
}
