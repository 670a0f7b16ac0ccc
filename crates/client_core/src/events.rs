//! Browser events the page reacts to, already reduced to what the behavior needs.

use shared::domain::{AnimatedIndex, HoverTarget, NavLinkIndex};

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// `DOMContentLoaded`, or immediately when the document was already parsed.
    ContentLoaded,
    /// Window `load`.
    Loaded,
    Scroll,
    Resize {
        width: f64,
    },
    HamburgerClick,
    NavLinkClick(NavLinkIndex),
    /// Click on any `a[href^="#"]`.
    AnchorClick {
        href: String,
    },
    DocumentClick {
        on_hamburger: bool,
        in_menu: bool,
    },
    KeyDown {
        key: String,
    },
    TouchStart {
        x: f64,
    },
    TouchEnd {
        x: f64,
    },
    Intersection {
        target: AnimatedIndex,
        intersecting: bool,
    },
    PointerEnter(HoverTarget),
    PointerLeave(HoverTarget),
    HoverTouchStart(HoverTarget),
    HoverTouchEnd(HoverTarget),
}

impl PageEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::ContentLoaded => "content_loaded",
            PageEvent::Loaded => "loaded",
            PageEvent::Scroll => "scroll",
            PageEvent::Resize { .. } => "resize",
            PageEvent::HamburgerClick => "hamburger_click",
            PageEvent::NavLinkClick(_) => "nav_link_click",
            PageEvent::AnchorClick { .. } => "anchor_click",
            PageEvent::DocumentClick { .. } => "document_click",
            PageEvent::KeyDown { .. } => "key_down",
            PageEvent::TouchStart { .. } => "touch_start",
            PageEvent::TouchEnd { .. } => "touch_end",
            PageEvent::Intersection { .. } => "intersection",
            PageEvent::PointerEnter(_) => "pointer_enter",
            PageEvent::PointerLeave(_) => "pointer_leave",
            PageEvent::HoverTouchStart(_) => "hover_touch_start",
            PageEvent::HoverTouchEnd(_) => "hover_touch_end",
        }
    }
}

/// What the host should do with the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Default,
    PreventDefault,
}
