//! Thin wrappers around the browser APIs the page drives.

pub mod layout;
pub mod media;
pub mod scroller;

use web_sys::{Document, HtmlElement, Window};

use crate::error::{DomError, DomResult};

pub fn window() -> DomResult<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> DomResult<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn root_element() -> DomResult<HtmlElement> {
    use wasm_bindgen::JsCast;

    document()?
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(DomError::NotMounted("html"))
}

/// Sets one inline style property, logging a failed write.
pub fn set_style(el: &HtmlElement, name: &str, value: &str) {
    if let Err(err) = el.style().set_property(name, value) {
        log::warn!("failed to set {}: {} ({:?})", name, value, err);
    }
}

/// `window.innerHeight`, or 0 when it cannot be read.
pub fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Milliseconds from `performance.now()`, falling back to the wall clock.
pub fn now() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(web_sys::js_sys::Date::now)
}
