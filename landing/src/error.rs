//! Error type for the few places the page touches the host environment.

use wasm_bindgen::JsValue;

/// Failures surfaced by host access, settings and logging setup.
///
/// None of these are fatal: callers log them and fall back to defaults.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    /// No `window` global (not running in a browser)
    #[error("no window available")]
    NoWindow,
    /// Window exists but has no document
    #[error("no document available")]
    NoDocument,
    /// A DOM call threw
    #[error("javascript error: {0}")]
    Js(String),
    /// Inline settings block is not valid JSON for [`crate::config::PageConfig`]
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        LandingError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;
