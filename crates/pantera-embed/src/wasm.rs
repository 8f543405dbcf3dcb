#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::EmbedFrame;

/// Extract a video identifier from WebAssembly.
///
/// Returns the identifier, or `undefined` when no matcher recognizes the
/// address.
///
/// # Examples (JavaScript)
/// ```javascript
/// import { extract_identifier } from 'pantera-embed';
///
/// extract_identifier("https://youtu.be/6ZSIwUwbITM"); // "6ZSIwUwbITM"
/// extract_identifier("not a url");                     // undefined
/// ```
#[wasm_bindgen]
pub fn extract_identifier(address: &str) -> Option<String> {
    crate::extract_identifier(address).map(|id| id.to_string())
}

/// Describe the default player frame for `address`, or `null` if the address
/// is not recognized.
#[wasm_bindgen]
pub fn embed_frame(address: &str) -> JsValue {
    crate::extract_identifier(address)
        .map(|id| EmbedFrame::builder(&id).build())
        .and_then(|frame| serde_wasm_bindgen::to_value(&frame).ok())
        .unwrap_or(JsValue::NULL)
}
