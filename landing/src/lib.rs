//! # lumina-landing
//!
//! The Lumina marketing landing page as a Leptos 0.8 client-side app.
//!
//! - [`sections`] - navigation bar, hero, feature grid, stats band, call to action, footer
//! - [`motion`] - entrance/exit transitions driven on animation frames
//! - [`content`] - the literal copy the sections render
//! - [`config`] / [`logging`] / [`error`] - settings, console logging, error type
//!
//! Built with Trunk from `index.html`; `main.rs` only calls [`start`].

pub mod config;
pub mod content;
pub mod error;
pub mod host;
pub mod icons;
pub mod logging;
pub mod motion;
pub mod sections;

use leptos::prelude::*;
use sections::{CallToAction, Features, Footer, Hero, Nav, Stats};
use tracing::{Level, info, warn};

pub use config::{Settings, SettingsSource};

/// Install the panic hook and logging, then mount [`App`] on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();

    // Settings load before logging exists; report problems once it does.
    let (settings, source, config_error) = match config::load() {
        Ok((settings, source)) => (settings, source, None),
        Err(err) => (Settings::default(), SettingsSource::Defaults, Some(err)),
    };
    let (level, level_error) = match logging::parse_level(&settings.log_level) {
        Ok(level) => (level, None),
        Err(err) => (Level::INFO, Some(err)),
    };
    if let Err(err) = logging::init(level) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    for err in config_error.iter().chain(level_error.iter()) {
        warn!(error = %err, "falling back to default settings");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        ?source,
        %level,
        "mounting landing page"
    );
    leptos::mount::mount_to_body(move || view! { <App settings=settings /> });
}

/// The whole page.
#[component]
pub fn App(#[prop(optional)] settings: Settings) -> impl IntoView {
    provide_context(settings);

    view! {
        <div class="page">
            <Nav />
            <main>
                <Hero />
                <Features />
                <Stats />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}
