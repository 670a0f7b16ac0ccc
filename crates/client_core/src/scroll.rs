//! Navbar chrome and active-section tracking, each recomputed at most once per frame.

use shared::{
    domain::{ElementRef, NavLinkIndex, SectionBounds},
    protocol::{DomPatch, Schedule, Task},
};
use tracing::debug;

use crate::{config::ScrollConfig, surface::Surface};

const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarChrome {
    Flat,
    Elevated,
}

impl NavbarChrome {
    pub fn background(self) -> &'static str {
        match self {
            NavbarChrome::Flat => "rgba(255, 255, 255, 0.95)",
            NavbarChrome::Elevated => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            NavbarChrome::Flat => "none",
            NavbarChrome::Elevated => "0 2px 10px rgba(0, 0, 0, 0.1)",
        }
    }
}

pub fn navbar_chrome(scroll_y: f64, elevate_after: f64) -> NavbarChrome {
    if scroll_y > elevate_after {
        NavbarChrome::Elevated
    } else {
        NavbarChrome::Flat
    }
}

/// Id of the last section (document order) whose shifted range
/// `[top - shift, bottom - shift)` contains `scroll_y`.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, shift: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let start = section.top - shift;
            let end = section.bottom() - shift;
            scroll_y >= start && scroll_y < end
        })
        .last()
        .map(|section| section.id.as_str())
}

pub struct ScrollReactor {
    navbar_pending: bool,
    section_pending: bool,
    config: ScrollConfig,
}

impl ScrollReactor {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            navbar_pending: false,
            section_pending: false,
            config,
        }
    }

    /// Arms one frame task per recomputation unless one is already pending.
    pub fn on_scroll(&mut self, surface: &dyn Surface) {
        if !self.navbar_pending {
            self.navbar_pending = true;
            surface.schedule(Schedule::NextFrame, Task::RecomputeNavbar);
        }
        if !self.section_pending {
            self.section_pending = true;
            surface.schedule(Schedule::NextFrame, Task::RecomputeActiveSection);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.navbar_pending || self.section_pending
    }

    pub fn recompute_navbar(&mut self, surface: &dyn Surface) {
        self.navbar_pending = false;
        let chrome = navbar_chrome(surface.scroll_y(), self.config.elevate_after_px);
        surface.apply(DomPatch::SetStyle {
            target: ElementRef::Navbar,
            property: "background",
            value: chrome.background().to_string(),
        });
        surface.apply(DomPatch::SetStyle {
            target: ElementRef::Navbar,
            property: "box-shadow",
            value: chrome.box_shadow().to_string(),
        });
    }

    pub fn recompute_active_section(&mut self, surface: &dyn Surface) {
        self.section_pending = false;
        let sections = surface.sections();
        let shift = surface.viewport().height * self.config.active_offset_ratio;
        let current = active_section(&sections, surface.scroll_y(), shift);
        debug!(section = ?current, "active section recomputed");

        let hrefs = surface.nav_link_hrefs();
        for index in 0..hrefs.len() {
            surface.apply(DomPatch::SetClass {
                target: ElementRef::NavLink(NavLinkIndex(index)),
                class: ACTIVE_CLASS,
                enabled: false,
            });
        }

        let Some(current) = current else {
            return;
        };
        let wanted = format!("#{current}");
        for (index, href) in hrefs.iter().enumerate() {
            if *href == wanted {
                surface.apply(DomPatch::SetClass {
                    target: ElementRef::NavLink(NavLinkIndex(index)),
                    class: ACTIVE_CLASS,
                    enabled: true,
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/scroll_tests.rs"]
mod tests;
