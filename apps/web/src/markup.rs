//! Element shapes the front end creates itself, kept free of `web_sys` so
//! they can be checked off the browser.

use shared::domain::MessageKind;

pub const TYPING_CURSOR_CLASS: &str = "typing-cursor";
pub const TYPING_CURSOR_TEXT: &str = "|";
pub const FORM_MESSAGE_CLASS: &str = "form-message";

/// Attribute stamped on each animated block so observer entries map back to
/// the index the page behavior knows it by.
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

pub const CONFIG_BLOCK_ID: &str = "site-config";
pub const FORM_MODE_ATTR: &str = "data-mode";

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const HERO_TITLE_SELECTOR: &str = ".hero-title";
pub const SKILL_TAG_SELECTOR: &str = ".skill-tag";
pub const TIMELINE_CARD_SELECTOR: &str = ".timeline-content";
pub const CONTACT_FORM_SELECTOR: &str = "#contactForm, .contact-form";
pub const CONTACT_STATUS_SELECTOR: &str = "#contactStatus";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const MAIL_LINK_SELECTOR: &str = ".contact-info a[href^=\"mailto:\"]";

pub fn form_message_class(kind: MessageKind) -> String {
    let modifier = match kind {
        MessageKind::Success => "success",
        MessageKind::Error => "error",
    };
    format!("{FORM_MESSAGE_CLASS} {FORM_MESSAGE_CLASS}--{modifier}")
}

pub fn form_message_style(kind: MessageKind) -> String {
    let (background, color, border) = match kind {
        MessageKind::Success => ("#d4edda", "#155724", "#c3e6cb"),
        MessageKind::Error => ("#f8d7da", "#721c24", "#f5c6cb"),
    };
    format!(
        "padding: 1rem; margin-bottom: 1rem; border-radius: 5px; \
         background-color: {background}; color: {color}; border: 1px solid {border}; \
         transition: opacity 0.3s ease;"
    )
}

pub fn parse_reveal_index(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
#[path = "tests/markup_tests.rs"]
mod tests;
