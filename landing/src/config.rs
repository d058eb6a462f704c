//! Runtime settings for the page.
//!
//! `index.html` may carry an inline JSON block:
//!
//! ```html
//! <script id="lumina-config" type="application/json">
//!   { "log_level": "debug", "hero_image_url": "/assets/dashboard.png" }
//! </script>
//! ```
//!
//! Every field is optional; anything missing falls back to [`Settings::default`].

use serde::Deserialize;

use crate::error::Result;
use crate::host;

/// Id of the inline settings element in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "lumina-config";

/// Scroll offset (px) past which the navbar switches to its compact style.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 20.0;

pub const DEFAULT_HERO_IMAGE_URL: &str = "https://picsum.photos/seed/dashboard/1600/900";
pub const DEFAULT_HERO_IMAGE_ALT: &str = "Lumina Dashboard";

/// Settings block as written in the page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    pub log_level: Option<String>,
    pub scroll_threshold_px: Option<f64>,
    pub hero_image_url: Option<String>,
    pub hero_image_alt: Option<String>,
}

/// Resolved settings, provided to components through context.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_level: String,
    pub scroll_threshold_px: f64,
    pub hero_image_url: String,
    pub hero_image_alt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            hero_image_url: DEFAULT_HERO_IMAGE_URL.into(),
            hero_image_alt: DEFAULT_HERO_IMAGE_ALT.into(),
        }
    }
}

/// Where the resolved settings came from, for the start-up log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    Defaults,
    Inline,
}

impl PageConfig {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay this config on the defaults.
    ///
    /// A negative or non-finite threshold is ignored.
    pub fn resolve(self) -> Settings {
        let defaults = Settings::default();
        let scroll_threshold_px = self
            .scroll_threshold_px
            .filter(|px| px.is_finite() && *px >= 0.0)
            .unwrap_or(defaults.scroll_threshold_px);

        Settings {
            log_level: self.log_level.unwrap_or(defaults.log_level),
            scroll_threshold_px,
            hero_image_url: self.hero_image_url.unwrap_or(defaults.hero_image_url),
            hero_image_alt: self.hero_image_alt.unwrap_or(defaults.hero_image_alt),
        }
    }
}

/// Read the inline settings block from the document.
///
/// Runs before logging is up, so problems are returned rather than logged.
pub fn load() -> Result<(Settings, SettingsSource)> {
    match host::element_text(CONFIG_ELEMENT_ID)? {
        Some(json) if !json.trim().is_empty() => {
            Ok((PageConfig::parse(&json)?.resolve(), SettingsSource::Inline))
        }
        _ => Ok((Settings::default(), SettingsSource::Defaults)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LandingError;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let settings = PageConfig::parse("{}").unwrap().resolve();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.scroll_threshold_px, 20.0);
    }

    #[test]
    fn partial_config_overrides_only_given_fields() {
        let settings = PageConfig::parse(r#"{"log_level":"debug","hero_image_alt":"Preview"}"#)
            .unwrap()
            .resolve();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.hero_image_alt, "Preview");
        assert_eq!(settings.hero_image_url, DEFAULT_HERO_IMAGE_URL);
    }

    #[test]
    fn negative_threshold_is_ignored() {
        let config = PageConfig {
            scroll_threshold_px: Some(-5.0),
            ..Default::default()
        };
        assert_eq!(config.resolve().scroll_threshold_px, DEFAULT_SCROLL_THRESHOLD_PX);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PageConfig::parse(r#"{"theme":"dark"}"#).unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = PageConfig::parse("{ log_level: ").unwrap_err();
        assert!(err.to_string().starts_with("invalid page config"));
    }
}
