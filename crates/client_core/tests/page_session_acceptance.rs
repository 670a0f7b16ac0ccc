use std::rc::Rc;

use client_core::{
    load_config, FormMode, FormSnapshot, HeadlessSurface, MissingFormTransport, Page, PageEvent,
    SubmitOutcome,
};
use shared::{
    domain::{AnimatedIndex, ElementRef, MessageKind, NavLinkIndex, SectionBounds},
    protocol::{DomPatch, Schedule},
};

/// Runs every scheduled task, including ones scheduled while draining.
fn drain(page: &mut Page, surface: &HeadlessSurface) -> Vec<Schedule> {
    let mut seen = Vec::new();
    loop {
        let pending = surface.take_scheduled();
        if pending.is_empty() {
            return seen;
        }
        for (when, task) in pending {
            seen.push(when);
            page.run_task(task, surface);
        }
    }
}

#[test]
fn visitor_session_acceptance() {
    let config = load_config(Some(r#"{"effects":{"typing_cursor":false}}"#));
    let surface = HeadlessSurface::default()
        .with_viewport(390.0, 840.0)
        .with_sections(vec![
            SectionBounds::new("home", 0.0, 700.0),
            SectionBounds::new("experience", 700.0, 1200.0),
            SectionBounds::new("contact", 1900.0, 600.0),
        ])
        .with_nav_links(["#home", "#experience", "#contact"])
        .with_text(ElementRef::HeroTitle, "Jane Doe")
        .with_animated(vec![2, 0]);
    let mut page = Page::new(&config, Rc::new(MissingFormTransport));

    page.handle_event(PageEvent::ContentLoaded, &surface);
    page.handle_event(PageEvent::Loaded, &surface);
    drain(&mut page, &surface);

    let typed: String = surface
        .patches()
        .iter()
        .filter_map(|patch| match patch {
            DomPatch::AppendText {
                target: ElementRef::HeroTitle,
                text,
            } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(typed, "Jane Doe");
    assert_eq!(
        surface.style_of(&ElementRef::Body, "opacity").as_deref(),
        Some("1")
    );

    // Mobile menu: edge swipe opens, link tap closes.
    page.handle_event(PageEvent::TouchStart { x: 12.0 }, &surface);
    page.handle_event(PageEvent::TouchEnd { x: 180.0 }, &surface);
    assert!(page.navigation().is_open());
    page.handle_event(PageEvent::NavLinkClick(NavLinkIndex(1)), &surface);
    assert!(!page.navigation().is_open());

    // Scrolling into the experience section.
    surface.set_scroll_y(900.0);
    page.handle_event(PageEvent::Scroll, &surface);
    page.handle_event(PageEvent::Scroll, &surface);
    let frames = drain(&mut page, &surface);
    assert_eq!(frames, vec![Schedule::NextFrame, Schedule::NextFrame]);
    assert!(surface.has_class(&ElementRef::NavLink(NavLinkIndex(1)), "active"));
    assert!(!surface.has_class(&ElementRef::NavLink(NavLinkIndex(0)), "active"));

    // First block enters the viewport and stays revealed.
    page.handle_event(
        PageEvent::Intersection {
            target: AnimatedIndex(0),
            intersecting: true,
        },
        &surface,
    );
    drain(&mut page, &surface);
    page.handle_event(
        PageEvent::Intersection {
            target: AnimatedIndex(0),
            intersecting: false,
        },
        &surface,
    );
    assert_eq!(
        surface
            .style_of(&ElementRef::Animated(AnimatedIndex(0)), "opacity")
            .as_deref(),
        Some("1")
    );
    assert_eq!(
        surface
            .style_of(
                &ElementRef::AnimatedChild {
                    parent: AnimatedIndex(0),
                    child: 1
                },
                "opacity"
            )
            .as_deref(),
        Some("1")
    );
    assert_eq!(
        surface
            .style_of(&ElementRef::Animated(AnimatedIndex(1)), "opacity")
            .as_deref(),
        Some("0")
    );
}

#[tokio::test]
async fn inline_form_acceptance() {
    let mut config = load_config(None);
    config.form.apply_mode_override("inline").expect("mode");
    assert_eq!(config.form.mode, FormMode::Inline);
    let surface = HeadlessSurface::default();
    let mut page = Page::new(&config, Rc::new(MissingFormTransport));
    let contact = page.contact();

    let snapshot = FormSnapshot::default()
        .with_field("name", "Jane")
        .with_field("email", "jane@example.com")
        .with_field("message", "Would love to chat about a role.");
    let outcome = contact.submit(snapshot, &surface).await;
    assert_eq!(outcome, SubmitOutcome::Scheduled);

    drain(&mut page, &surface);

    let patches = surface.patches();
    assert!(patches.contains(&DomPatch::ShowFormMessage {
        kind: MessageKind::Success,
        text: "Thank you for your message! I'll get back to you soon.".into(),
    }));
    assert!(patches.contains(&DomPatch::ResetForm));
    assert_eq!(patches.last(), Some(&DomPatch::RemoveFormMessage));
}
