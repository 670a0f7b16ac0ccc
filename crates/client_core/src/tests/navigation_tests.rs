use super::*;
use crate::surface::HeadlessSurface;

fn controller() -> NavigationController {
    NavigationController::new(NavigationConfig::default())
}

#[test]
fn toggle_twice_restores_closed_state() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();

    nav.toggle(&surface);
    assert!(nav.is_open());
    nav.toggle(&surface);
    assert!(!nav.is_open());
}

#[test]
fn open_marks_hamburger_menu_and_locks_body_scroll() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();

    nav.open(&surface);

    assert!(surface.has_class(&ElementRef::Hamburger, "active"));
    assert!(surface.has_class(&ElementRef::NavMenu, "active"));
    assert_eq!(
        surface.style_of(&ElementRef::Body, "overflow").as_deref(),
        Some("hidden")
    );
    assert!(surface.patches().contains(&DomPatch::SetAttribute {
        target: ElementRef::Hamburger,
        name: "aria-expanded",
        value: "true".into(),
    }));
}

#[test]
fn close_is_idempotent() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();
    nav.open(&surface);
    surface.take_patches();

    nav.close(&surface);
    let first = surface.take_patches();
    nav.close(&surface);
    let second = surface.take_patches();

    assert!(!nav.is_open());
    assert_eq!(first, second);
    assert!(second.contains(&DomPatch::SetStyle {
        target: ElementRef::Body,
        property: "overflow",
        value: String::new(),
    }));
}

#[test]
fn swipe_within_threshold_has_no_effect() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();

    nav.on_touch_start(10.0);
    nav.on_touch_end(110.0, &surface);

    assert!(!nav.is_open());
    assert!(surface.patches().is_empty());
}

#[test]
fn edge_swipe_opens_closed_menu() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();

    nav.on_touch_start(10.0);
    nav.on_touch_end(111.0, &surface);

    assert!(nav.is_open());
}

#[test]
fn swipe_from_outside_edge_zone_does_not_open() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();

    nav.on_touch_start(50.0);
    nav.on_touch_end(300.0, &surface);

    assert!(!nav.is_open());
}

#[test]
fn edge_zone_is_measured_from_the_viewport_edge() {
    let surface = HeadlessSurface::default();

    let mut nav = controller();
    nav.on_touch_start(49.0);
    nav.on_touch_end(160.0, &surface);
    assert!(nav.is_open());

    let mut nav = controller();
    nav.on_touch_start(49.0 + 200.0);
    nav.on_touch_end(160.0 + 200.0, &surface);
    assert!(!nav.is_open());
}

#[test]
fn edge_swipe_leaves_open_menu_open() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();
    nav.open(&surface);
    surface.take_patches();

    nav.on_touch_start(5.0);
    nav.on_touch_end(200.0, &surface);

    assert!(nav.is_open());
    assert!(surface.patches().is_empty());
}

#[test]
fn reverse_swipe_closes_only_when_open() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();

    nav.on_touch_start(300.0);
    nav.on_touch_end(100.0, &surface);
    assert!(surface.patches().is_empty());

    nav.open(&surface);
    nav.on_touch_start(300.0);
    nav.on_touch_end(100.0, &surface);
    assert!(!nav.is_open());
}

#[test]
fn touch_end_without_start_is_ignored() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();

    nav.on_touch_end(500.0, &surface);

    assert!(surface.patches().is_empty());
}

#[test]
fn escape_and_outside_click_close_menu() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();

    nav.open(&surface);
    nav.on_key("Enter", &surface);
    assert!(nav.is_open());
    nav.on_key("Escape", &surface);
    assert!(!nav.is_open());

    nav.open(&surface);
    nav.on_document_click(false, true, &surface);
    assert!(nav.is_open(), "clicks inside the menu keep it open");
    nav.on_document_click(true, false, &surface);
    assert!(nav.is_open(), "clicks on the hamburger are handled by toggle");
    nav.on_document_click(false, false, &surface);
    assert!(!nav.is_open());
}

#[test]
fn resize_past_breakpoint_forces_close() {
    let surface = HeadlessSurface::default();
    let mut nav = controller();
    nav.open(&surface);

    nav.on_resize(768.0, &surface);
    assert!(nav.is_open());
    nav.on_resize(769.0, &surface);
    assert!(!nav.is_open());
}

#[test]
fn anchor_click_scrolls_to_fragment() {
    let surface = HeadlessSurface::default();
    let nav = controller();

    assert!(nav.on_anchor_click("#about", &surface));
    assert!(!nav.on_anchor_click("#", &surface));
    assert!(!nav.on_anchor_click("/resume.pdf", &surface));

    assert_eq!(
        surface.patches(),
        vec![DomPatch::ScrollIntoView(ElementRef::Section("about".into()))]
    );
}
