use std::rc::Rc;

use client_core::{config::AnimationConfig, Disposition, PageEvent};
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Array;
use shared::domain::{
    AnimatedIndex, HoverTarget, NavLinkIndex, SkillTagIndex, TimelineCardIndex,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, Node, TouchEvent, TouchList,
};

use crate::{
    bridge::Runtime,
    markup::{parse_reveal_index, REVEAL_INDEX_ATTR},
};

/// Registers every page-level listener. Listeners live as long as the page.
pub fn install(runtime: &Rc<Runtime>, animation: &AnimationConfig) -> Result<(), JsValue> {
    let surface = runtime.surface();
    let elements = surface.elements();
    let window = surface.window();
    let document = &elements.document;

    if let Some(hamburger) = &elements.hamburger {
        listen(hamburger, "click", runtime, |_| Some(PageEvent::HamburgerClick));
    }
    for (index, link) in elements.nav_links.iter().enumerate() {
        listen(link, "click", runtime, move |_| {
            Some(PageEvent::NavLinkClick(NavLinkIndex(index)))
        });
    }
    for anchor in &elements.anchors {
        let href_source = anchor.clone();
        listen_cancelable(anchor, "click", runtime, move |_| {
            Some(PageEvent::AnchorClick {
                href: href_source.get_attribute("href").unwrap_or_default(),
            })
        });
    }

    let hamburger = elements.hamburger.clone();
    let nav_menu = elements.nav_menu.clone();
    listen(document, "click", runtime, move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let contains = |el: &Option<HtmlElement>| {
            el.as_ref()
                .is_some_and(|el| el.contains(target.as_ref()))
        };
        Some(PageEvent::DocumentClick {
            on_hamburger: contains(&hamburger),
            in_menu: contains(&nav_menu),
        })
    });
    listen(document, "keydown", runtime, |event| {
        let key = event.dyn_ref::<KeyboardEvent>()?.key();
        Some(PageEvent::KeyDown { key })
    });
    listen(document, "touchstart", runtime, |event| {
        let x = first_touch_x(event.dyn_ref::<TouchEvent>()?.changed_touches())?;
        Some(PageEvent::TouchStart { x })
    });
    listen(document, "touchend", runtime, |event| {
        let x = first_touch_x(event.dyn_ref::<TouchEvent>()?.changed_touches())?;
        Some(PageEvent::TouchEnd { x })
    });

    listen(window, "scroll", runtime, |_| Some(PageEvent::Scroll));
    let resized = window.clone();
    listen(window, "resize", runtime, move |_| {
        let width = resized.inner_width().ok()?.as_f64()?;
        Some(PageEvent::Resize { width })
    });

    for (index, tag) in elements.skill_tags.iter().enumerate() {
        let target = HoverTarget::SkillTag(SkillTagIndex(index));
        listen(tag, "mouseenter", runtime, move |_| Some(PageEvent::PointerEnter(target)));
        listen(tag, "mouseleave", runtime, move |_| Some(PageEvent::PointerLeave(target)));
        listen(tag, "touchstart", runtime, move |_| {
            Some(PageEvent::HoverTouchStart(target))
        });
        listen(tag, "touchend", runtime, move |_| Some(PageEvent::HoverTouchEnd(target)));
    }
    for (index, card) in elements.timeline_cards.iter().enumerate() {
        let target = HoverTarget::TimelineCard(TimelineCardIndex(index));
        listen(card, "mouseenter", runtime, move |_| Some(PageEvent::PointerEnter(target)));
        listen(card, "mouseleave", runtime, move |_| Some(PageEvent::PointerLeave(target)));
    }

    surface.set_observer(entrance_observer(runtime, animation)?);
    Ok(())
}

/// Maps observer entries back to animated block indices via the attribute
/// stamped at bind time.
fn entrance_observer(
    runtime: &Rc<Runtime>,
    animation: &AnimationConfig,
) -> Result<IntersectionObserver, JsValue> {
    let runtime = Rc::clone(runtime);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let raw = entry.target().get_attribute(REVEAL_INDEX_ATTR);
                let Some(index) = parse_reveal_index(raw.as_deref()) else {
                    continue;
                };
                runtime.dispatch(PageEvent::Intersection {
                    target: AnimatedIndex(index),
                    intersecting: entry.is_intersecting(),
                });
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(animation.threshold));
    options.set_root_margin(&animation.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

fn first_touch_x(touches: TouchList) -> Option<f64> {
    touches.get(0).map(|touch| f64::from(touch.client_x()))
}

fn listen<F>(target: &EventTarget, event_type: &'static str, runtime: &Rc<Runtime>, to_event: F)
where
    F: Fn(&Event) -> Option<PageEvent> + 'static,
{
    let runtime = Rc::clone(runtime);
    EventListener::new(target, event_type, move |event| {
        if let Some(page_event) = to_event(event) {
            runtime.dispatch(page_event);
        }
    })
    .forget();
}

/// Like `listen`, but the page may cancel the browser's default action.
fn listen_cancelable<F>(
    target: &EventTarget,
    event_type: &'static str,
    runtime: &Rc<Runtime>,
    to_event: F,
) where
    F: Fn(&Event) -> Option<PageEvent> + 'static,
{
    let runtime = Rc::clone(runtime);
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(page_event) = to_event(event) else {
                return;
            };
            if runtime.dispatch(page_event) == Disposition::PreventDefault {
                event.prevent_default();
            }
        },
    )
    .forget();
}
