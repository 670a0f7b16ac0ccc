use std::rc::Rc;

use client_core::FormSnapshot;
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};

use crate::bridge::{Runtime, WebSurface};

/// Takes over the contact form's submit. The network round trip runs on
/// `spawn_local` and touches the page only through the shared `ContactForm`.
pub fn install(runtime: &Rc<Runtime>) {
    let Some(form) = runtime.surface().elements().contact_form.clone() else {
        debug!("page has no contact form");
        return;
    };
    let target = form.clone();
    let runtime = Rc::clone(runtime);
    EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            submit(&runtime, &form);
        },
    )
    .forget();
}

fn submit(runtime: &Rc<Runtime>, form: &HtmlFormElement) {
    let snapshot = match snapshot(form, runtime.surface()) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(error = ?err, "could not read contact form");
            return;
        }
    };
    let Some(contact) = runtime.contact() else {
        warn!("page busy; dropping contact form submit");
        return;
    };

    let runtime = Rc::clone(runtime);
    spawn_local(async move {
        let outcome = contact.submit(snapshot, runtime.surface()).await;
        debug!(?outcome, "contact form submission settled");
        runtime.arm_scheduled();
    });
}

/// Reads the form's entries in document order, plus what the fallback paths
/// need from the surrounding page.
pub fn snapshot(form: &HtmlFormElement, surface: &WebSurface) -> Result<FormSnapshot, JsValue> {
    let mut snapshot = FormSnapshot {
        action: form.get_attribute("action").unwrap_or_default(),
        page_url: surface.window().location().href().ok(),
        mail_link: surface.elements().mail_link_href(),
        ..FormSnapshot::default()
    };

    let data = FormData::new_with_form(form)?;
    for entry in data.entries() {
        let pair: Array = entry?.unchecked_into();
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            snapshot = snapshot.with_field(name, value);
        }
    }
    Ok(snapshot)
}
