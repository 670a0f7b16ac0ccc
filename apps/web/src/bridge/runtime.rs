use std::{cell::RefCell, rc::Rc};

use client_core::{ContactForm, Disposition, Page, PageEvent};
use gloo::timers::callback::Timeout;
use shared::protocol::{Schedule, Task};
use tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast};

use super::WebSurface;

/// Owns the page behavior and the surface it drives.
///
/// Every entry point borrows the page for one synchronous dispatch, then arms
/// whatever the dispatch scheduled.
pub struct Runtime {
    page: RefCell<Page>,
    surface: WebSurface,
}

impl Runtime {
    pub fn new(page: Page, surface: WebSurface) -> Rc<Self> {
        Rc::new(Self {
            page: RefCell::new(page),
            surface,
        })
    }

    pub fn surface(&self) -> &WebSurface {
        &self.surface
    }

    pub fn contact(&self) -> Option<Rc<ContactForm>> {
        self.page.try_borrow().ok().map(|page| page.contact())
    }

    pub fn dispatch(self: &Rc<Self>, event: PageEvent) -> Disposition {
        let disposition = match self.page.try_borrow_mut() {
            Ok(mut page) => page.handle_event(event, &self.surface),
            Err(_) => {
                warn!(event = event.name(), "page busy; dropping re-entrant event");
                Disposition::Default
            }
        };
        self.arm_scheduled();
        disposition
    }

    fn run_task(self: &Rc<Self>, task: Task) {
        match self.page.try_borrow_mut() {
            Ok(mut page) => page.run_task(task, &self.surface),
            Err(_) => warn!(?task, "page busy; dropping re-entrant task"),
        }
        self.arm_scheduled();
    }

    /// Hands queued tasks to the browser's timers and frame callbacks.
    pub fn arm_scheduled(self: &Rc<Self>) {
        for (when, task) in self.surface.take_scheduled() {
            let runtime = Rc::clone(self);
            match when {
                Schedule::After(delay) => {
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    Timeout::new(millis, move || runtime.run_task(task)).forget();
                }
                Schedule::NextFrame => {
                    let callback = Closure::once_into_js(move || runtime.run_task(task));
                    if let Err(err) = self
                        .surface
                        .window()
                        .request_animation_frame(callback.unchecked_ref())
                    {
                        warn!(error = ?err, "animation frame request failed");
                    }
                }
            }
        }
    }
}
