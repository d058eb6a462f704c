//! Thin wrappers over the browser globals the page reads.

use crate::error::{LandingError, Result};

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

pub fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(LandingError::NoDocument)
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_offset() -> Result<f64> {
    Ok(window()?.scroll_y()?)
}

/// Monotonic milliseconds since page load, used as the animation time base.
///
/// Falls back to the wall clock only when `performance` is missing.
pub fn now_ms() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map(|perf| perf.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Text content of the element with `id`, if present.
pub fn element_text(id: &str) -> Result<Option<String>> {
    Ok(document()?
        .get_element_by_id(id)
        .and_then(|el| el.text_content()))
}
