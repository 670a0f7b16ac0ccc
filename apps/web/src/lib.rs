//! Browser front end for the portfolio page: binds the DOM, installs
//! listeners, and drives `client_core::Page` through a `WebSurface`.

pub mod logging;
pub mod markup;

#[cfg(target_arch = "wasm32")]
mod bridge;
#[cfg(target_arch = "wasm32")]
mod controller;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::rc::Rc;

    use client_core::{parse_config, FormTransport, HttpFormTransport, Page, PageEvent};
    use gloo::events::EventListener;
    use tracing::{info, warn};
    use wasm_bindgen::prelude::*;

    use crate::{
        bridge::{Elements, Runtime, WebSurface},
        controller, logging,
    };

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        if document.ready_state() == "loading" {
            EventListener::once(&document, "DOMContentLoaded", |_| {
                if let Err(err) = boot() {
                    web_sys::console::error_2(&JsValue::from_str("page boot failed"), &err);
                }
            })
            .forget();
            Ok(())
        } else {
            boot()
        }
    }

    fn boot() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let elements = Elements::bind(&document)?;

        let (mut config, config_err) = parse_config(elements.config_block().as_deref());
        logging::init(&config.log_level);
        if let Some(err) = config_err {
            warn!(error = %err, "ignoring embedded site config");
        }
        if let Some(mode) = elements.form_mode_override() {
            if let Err(err) = config.form.apply_mode_override(&mode) {
                warn!(error = %err, "keeping configured form mode");
            }
        }

        let transport: Rc<dyn FormTransport> = Rc::new(HttpFormTransport::new());
        let page = Page::new(&config, transport);
        let runtime = Runtime::new(page, WebSurface::new(window.clone(), elements));

        controller::listeners::install(&runtime, &config.animation)?;
        controller::form::install(&runtime);
        runtime.dispatch(PageEvent::ContentLoaded);

        if document.ready_state() == "complete" {
            runtime.dispatch(PageEvent::Loaded);
        } else {
            let runtime = Rc::clone(&runtime);
            EventListener::once(&window, "load", move |_| {
                runtime.dispatch(PageEvent::Loaded);
            })
            .forget();
        }

        info!(mode = ?config.form.mode, "page behavior ready");
        Ok(())
    }
}
