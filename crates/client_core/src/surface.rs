//! The host seam: everything the page behavior reads from or writes to the document.

use shared::{
    domain::{AnimatedIndex, ElementRef, SectionBounds, Viewport},
    protocol::{DomPatch, Schedule, Task},
};

/// A document the page behavior runs against.
///
/// The browser front end implements it over `web-sys`; `HeadlessSurface`
/// implements it in memory. Patches must be applied in the order received.
/// Scheduled tasks are handed back through `Page::run_task`.
pub trait Surface {
    fn scroll_y(&self) -> f64;
    fn viewport(&self) -> Viewport;
    /// `section[id]` elements in document order.
    fn sections(&self) -> Vec<SectionBounds>;
    /// `href` attribute of every `.nav-link`, in document order.
    fn nav_link_hrefs(&self) -> Vec<String>;
    fn text_of(&self, target: &ElementRef) -> Option<String>;
    fn animated_count(&self) -> usize;
    fn animated_children(&self, parent: AnimatedIndex) -> usize;
    fn apply(&self, patch: DomPatch);
    fn schedule(&self, when: Schedule, task: Task);
}

#[cfg(any(test, feature = "test-support"))]
mod headless;
#[cfg(any(test, feature = "test-support"))]
pub use headless::HeadlessSurface;
