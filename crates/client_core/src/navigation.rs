//! Mobile menu state plus in-page anchor scrolling.

use shared::{domain::ElementRef, protocol::DomPatch};
use tracing::debug;

use crate::{config::NavigationConfig, surface::Surface};

const ACTIVE_CLASS: &str = "active";

pub struct NavigationController {
    open: bool,
    touch_start_x: Option<f64>,
    config: NavigationConfig,
}

impl NavigationController {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            open: false,
            touch_start_x: None,
            config,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, surface: &dyn Surface) {
        self.set_open(true, surface);
    }

    pub fn close(&mut self, surface: &dyn Surface) {
        self.set_open(false, surface);
    }

    pub fn toggle(&mut self, surface: &dyn Surface) {
        self.set_open(!self.open, surface);
    }

    fn set_open(&mut self, open: bool, surface: &dyn Surface) {
        if self.open != open {
            debug!(open, "menu state changed");
        }
        self.open = open;

        for target in [ElementRef::Hamburger, ElementRef::NavMenu] {
            surface.apply(DomPatch::SetClass {
                target,
                class: ACTIVE_CLASS,
                enabled: open,
            });
        }
        surface.apply(DomPatch::SetStyle {
            target: ElementRef::Body,
            property: "overflow",
            value: if open { "hidden" } else { "" }.to_string(),
        });
        surface.apply(DomPatch::SetAttribute {
            target: ElementRef::Hamburger,
            name: "aria-expanded",
            value: open.to_string(),
        });
    }

    /// A click that landed outside both the hamburger and the menu.
    pub fn on_document_click(&mut self, on_hamburger: bool, in_menu: bool, surface: &dyn Surface) {
        if self.open && !on_hamburger && !in_menu {
            self.close(surface);
        }
    }

    pub fn on_key(&mut self, key: &str, surface: &dyn Surface) {
        if key == "Escape" && self.open {
            self.close(surface);
        }
    }

    pub fn on_resize(&mut self, width: f64, surface: &dyn Surface) {
        if width > self.config.breakpoint_px && self.open {
            self.close(surface);
        }
    }

    /// `x` is in viewport (client) coordinates, like the edge zone.
    pub fn on_touch_start(&mut self, x: f64) {
        self.touch_start_x = Some(x);
    }

    /// Horizontal swipe only; vertical drift is not filtered out.
    pub fn on_touch_end(&mut self, x: f64, surface: &dyn Surface) {
        let Some(start_x) = self.touch_start_x.take() else {
            return;
        };
        let delta = x - start_x;
        let threshold = self.config.swipe_threshold_px;

        if delta > threshold && start_x < self.config.edge_zone_px && !self.open {
            self.open(surface);
        } else if delta < -threshold && self.open {
            self.close(surface);
        }
    }

    /// Smoothly scrolls to the fragment target. Returns `true` when the
    /// browser's default jump should be suppressed.
    pub fn on_anchor_click(&self, href: &str, surface: &dyn Surface) -> bool {
        let Some(fragment) = href.strip_prefix('#').filter(|f| !f.is_empty()) else {
            return false;
        };
        surface.apply(DomPatch::ScrollIntoView(ElementRef::Section(
            fragment.to_string(),
        )));
        true
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
