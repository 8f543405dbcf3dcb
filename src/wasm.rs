#![cfg(target_arch = "wasm32")]
//! Browser entry points.

use crate::config::{validate_config, SiteConfig};
use crate::logging;
use crate::site::{self, Site};
use pantera_dom::WebDocument;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static SITE: RefCell<Option<Site<WebDocument>>> = const { RefCell::new(None) };
}

/// Install the enhancements with the default configuration once the
/// document is parsed.
///
/// # Examples (JavaScript)
/// ```javascript
/// import init, { start } from './pkg/pantera_site.js';
///
/// await init();
/// start();
/// ```
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_with(SiteConfig::default())
}

/// Like [`start`], with a configuration object. Missing fields take their
/// defaults.
///
/// # Examples (JavaScript)
/// ```javascript
/// start_with_config({ media: { video_url: "https://youtu.be/6ZSIwUwbITM" } });
/// ```
#[wasm_bindgen]
pub fn start_with_config(options: JsValue) -> Result<(), JsValue> {
    let config: SiteConfig = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid site configuration: {e}")))?;
    validate_config(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    start_with(config)
}

/// Remove every listener and the injected style.
#[wasm_bindgen]
pub fn stop() {
    let site = SITE.with(|slot| slot.borrow_mut().take());
    if let Some(site) = site {
        site.teardown();
    }
}

/// Load `address` into the video player, returning the video id.
#[wasm_bindgen]
pub fn load_video(address: &str) -> Result<String, JsValue> {
    SITE.with(|slot| {
        let slot = slot.borrow();
        let media = slot
            .as_ref()
            .and_then(|site| site.media())
            .ok_or_else(|| JsValue::from_str("Video player is not installed"))?;
        media
            .load(address)
            .map(|id| id.to_string())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

fn start_with(config: SiteConfig) -> Result<(), JsValue> {
    logging::init(&config.log_filter);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || install_now(config));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        install_now(config);
    }
    Ok(())
}

fn install_now(config: SiteConfig) {
    stop();
    match WebDocument::from_window() {
        Ok(doc) => {
            let installed = site::install(Rc::new(doc), &config);
            SITE.with(|slot| *slot.borrow_mut() = Some(installed));
        }
        Err(e) => tracing::error!("Cannot attach to the page: {}", e),
    }
}
