//! Browser Bindings
//!
//! Implementations of the core ports on top of browser APIs.

mod posts_api;
mod storage;

use wasm_bindgen::JsValue;

pub use posts_api::HttpPostSource;
pub use storage::BrowserStorage;

/// Best-effort text for a thrown JS value
fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
