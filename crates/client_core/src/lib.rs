use std::rc::Rc;

use tracing::trace;

pub mod animator;
pub mod config;
pub mod contact;
pub mod effects;
pub mod events;
pub mod navigation;
pub mod scroll;
pub mod surface;

pub use animator::EntranceAnimator;
pub use config::{load_config, parse_config, FormMode, SiteConfig};
pub use contact::{
    ContactForm, FormSnapshot, FormTransport, HttpFormTransport, MissingFormTransport,
    SubmitOutcome,
};
pub use effects::{HoverEffects, PageFade, Typewriter};
pub use events::{Disposition, PageEvent};
pub use navigation::NavigationController;
pub use scroll::ScrollReactor;
pub use surface::Surface;
#[cfg(any(test, feature = "test-support"))]
pub use surface::HeadlessSurface;

use shared::protocol::Task;

/// Every page behavior, routed from host events and scheduled tasks.
///
/// Components never call each other; `Page` only dispatches.
pub struct Page {
    navigation: NavigationController,
    scroll: ScrollReactor,
    animator: EntranceAnimator,
    typewriter: Typewriter,
    hover: HoverEffects,
    fade: PageFade,
    contact: Rc<ContactForm>,
}

impl Page {
    pub fn new(config: &SiteConfig, transport: Rc<dyn FormTransport>) -> Self {
        Self {
            navigation: NavigationController::new(config.navigation.clone()),
            scroll: ScrollReactor::new(config.scroll.clone()),
            animator: EntranceAnimator::new(config.animation.clone()),
            typewriter: Typewriter::new(&config.effects),
            hover: HoverEffects::new(&config.effects),
            fade: PageFade::new(&config.effects),
            contact: Rc::new(ContactForm::new(config.form.clone(), transport)),
        }
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn animator(&self) -> &EntranceAnimator {
        &self.animator
    }

    /// Shared handle for the async submit path, which must not hold a
    /// borrow of the page across the network round trip.
    pub fn contact(&self) -> Rc<ContactForm> {
        Rc::clone(&self.contact)
    }

    pub fn handle_event(&mut self, event: PageEvent, surface: &dyn Surface) -> Disposition {
        trace!(event = event.name(), "page event");
        match event {
            PageEvent::ContentLoaded => {
                self.animator.prepare(surface);
                self.typewriter.start(surface);
            }
            PageEvent::Loaded => self.fade.on_load(surface),
            PageEvent::Scroll => self.scroll.on_scroll(surface),
            PageEvent::Resize { width } => self.navigation.on_resize(width, surface),
            PageEvent::HamburgerClick => self.navigation.toggle(surface),
            PageEvent::NavLinkClick(_) => self.navigation.close(surface),
            PageEvent::AnchorClick { href } => {
                if self.navigation.on_anchor_click(&href, surface) {
                    return Disposition::PreventDefault;
                }
            }
            PageEvent::DocumentClick {
                on_hamburger,
                in_menu,
            } => self
                .navigation
                .on_document_click(on_hamburger, in_menu, surface),
            PageEvent::KeyDown { key } => self.navigation.on_key(&key, surface),
            PageEvent::TouchStart { x } => self.navigation.on_touch_start(x),
            PageEvent::TouchEnd { x } => self.navigation.on_touch_end(x, surface),
            PageEvent::Intersection {
                target,
                intersecting,
            } => self.animator.on_intersection(target, intersecting, surface),
            PageEvent::PointerEnter(target) => self.hover.on_enter(target, surface),
            PageEvent::PointerLeave(target) => self.hover.on_leave(target, surface),
            PageEvent::HoverTouchStart(target) => self.hover.on_touch_start(target, surface),
            PageEvent::HoverTouchEnd(target) => self.hover.on_touch_end(target, surface),
        }
        Disposition::Default
    }

    pub fn run_task(&mut self, task: Task, surface: &dyn Surface) {
        match task {
            Task::RecomputeNavbar => self.scroll.recompute_navbar(surface),
            Task::RecomputeActiveSection => self.scroll.recompute_active_section(surface),
            Task::TypeNextChar => self.typewriter.tick(surface),
            Task::RemoveTypingCursor => self.typewriter.remove_cursor(surface),
            Task::ResetHover(target) => self.hover.on_leave(target, surface),
            Task::RevealChild { parent, child } => {
                self.animator.reveal_child(parent, child, surface)
            }
            Task::FadeInBody => self.fade.fade_in(surface),
            Task::CompleteInlineSubmission => self.contact.complete_inline(surface),
            Task::DismissFormMessage { generation } => {
                self.contact.dismiss_message(generation, surface)
            }
            Task::RemoveFormMessage { generation } => {
                self.contact.remove_message(generation, surface)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
