use super::*;
use shared::{
    domain::{AnimatedIndex, ElementRef, NavLinkIndex, SkillTagIndex},
    protocol::{DomPatch, Schedule},
};

fn page(config: &SiteConfig) -> Page {
    Page::new(config, Rc::new(MissingFormTransport))
}

#[test]
fn hamburger_click_then_bubbled_document_click_keeps_menu_open() {
    let surface = HeadlessSurface::default();
    let mut page = page(&SiteConfig::default());

    page.handle_event(PageEvent::HamburgerClick, &surface);
    page.handle_event(
        PageEvent::DocumentClick {
            on_hamburger: true,
            in_menu: false,
        },
        &surface,
    );

    assert!(page.navigation().is_open());
}

#[test]
fn nav_link_click_closes_menu_and_scrolls_smoothly() {
    let surface = HeadlessSurface::default();
    let mut page = page(&SiteConfig::default());
    page.handle_event(PageEvent::HamburgerClick, &surface);

    page.handle_event(PageEvent::NavLinkClick(NavLinkIndex(2)), &surface);
    let disposition = page.handle_event(
        PageEvent::AnchorClick {
            href: "#contact".into(),
        },
        &surface,
    );

    assert!(!page.navigation().is_open());
    assert_eq!(disposition, Disposition::PreventDefault);
    assert_eq!(
        surface.patches().last(),
        Some(&DomPatch::ScrollIntoView(ElementRef::Section(
            "contact".into()
        )))
    );
}

#[test]
fn external_anchor_keeps_default_navigation() {
    let surface = HeadlessSurface::default();
    let mut page = page(&SiteConfig::default());

    let disposition = page.handle_event(
        PageEvent::AnchorClick {
            href: "https://example.com".into(),
        },
        &surface,
    );

    assert_eq!(disposition, Disposition::Default);
}

#[test]
fn scroll_event_defers_work_to_frame_tasks() {
    let surface = HeadlessSurface::default().with_nav_links(["#home"]);
    let mut page = page(&SiteConfig::default());

    page.handle_event(PageEvent::Scroll, &surface);
    assert!(surface.patches().is_empty());

    surface.set_scroll_y(500.0);
    for (when, task) in surface.take_scheduled() {
        assert_eq!(when, Schedule::NextFrame);
        page.run_task(task, &surface);
    }

    assert_eq!(
        surface.style_of(&ElementRef::Navbar, "background").as_deref(),
        Some("rgba(255, 255, 255, 0.98)")
    );
}

#[test]
fn content_loaded_prepares_animation_and_typing() {
    let surface = HeadlessSurface::default()
        .with_animated(vec![0])
        .with_text(ElementRef::HeroTitle, "Dev");
    let mut page = page(&SiteConfig::default());

    page.handle_event(PageEvent::ContentLoaded, &surface);
    page.handle_event(
        PageEvent::Intersection {
            target: AnimatedIndex(0),
            intersecting: true,
        },
        &surface,
    );

    assert!(page.animator().is_revealed(AnimatedIndex(0)));
    assert!(surface.patches().contains(&DomPatch::AppendText {
        target: ElementRef::HeroTitle,
        text: "D".into(),
    }));
}

#[test]
fn hover_touch_reset_runs_through_task() {
    let surface = HeadlessSurface::default();
    let mut page = page(&SiteConfig::default());
    let target = shared::domain::HoverTarget::SkillTag(SkillTagIndex(0));

    page.handle_event(PageEvent::HoverTouchStart(target), &surface);
    page.handle_event(PageEvent::HoverTouchEnd(target), &surface);
    for (_, task) in surface.take_scheduled() {
        page.run_task(task, &surface);
    }

    assert_eq!(
        surface.style_of(&target.element(), "transform").as_deref(),
        Some("scale(1)")
    );
}

#[test]
fn contact_mode_follows_config() {
    let mut config = SiteConfig::default();
    config.form.mode = FormMode::Inline;

    assert_eq!(page(&config).contact().mode(), FormMode::Inline);
}
