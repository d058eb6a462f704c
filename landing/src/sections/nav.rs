use leptos::ev;
use leptos::prelude::*;
use tracing::debug;

use super::CtaButton;
use crate::config::Settings;
use crate::content::{BRAND, CtaAction, NAV_LINKS};
use crate::host;
use crate::icons::{Glyph, Icon};
use crate::motion::{Pose, use_presence};

const MENU_TRANSITION_MS: f64 = 250.0;
const MENU_HIDDEN: Pose = Pose::hidden_offset(-20.0);

/// Header treatment, derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavStyle {
    /// Transparent and tall, at the top of the page
    #[default]
    Tall,
    /// Frosted and compact, once scrolled past the threshold
    Compact,
}

impl NavStyle {
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            NavStyle::Compact
        } else {
            NavStyle::Tall
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavStyle::Tall => "nav nav-tall",
            NavStyle::Compact => "nav nav-compact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Following any nav link closes the menu.
    pub fn on_link_activated(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let threshold = use_context::<Settings>()
        .unwrap_or_default()
        .scroll_threshold_px;
    let initial = host::scroll_offset()
        .map(|offset| NavStyle::from_offset(offset, threshold))
        .unwrap_or_default();
    let style = RwSignal::new(initial);
    let menu = RwSignal::new(MenuState::default());

    let scroll = window_event_listener(ev::scroll, move |_| {
        let Ok(offset) = host::scroll_offset() else {
            return;
        };
        let next = NavStyle::from_offset(offset, threshold);
        if style.get_untracked() != next {
            debug!(offset, ?next, "nav style changed");
            style.set(next);
        }
    });
    on_cleanup(move || scroll.remove());

    let open = Signal::derive(move || menu.get().is_open());
    let (panel_pose, panel_present) = use_presence(open, MENU_TRANSITION_MS, MENU_HIDDEN);

    let toggle_menu = move |_: ev::MouseEvent| {
        menu.update(|m| *m = m.toggle());
        debug!(state = ?menu.get_untracked(), "mobile menu toggled");
    };
    let close_menu = move |_: ev::MouseEvent| menu.update(|m| *m = m.on_link_activated());

    view! {
        <nav class=move || style.get().class()>
            <div class="container nav-inner">
                <a href="#" class="nav-brand">
                    <span class="brand-mark">
                        <Icon glyph=Glyph::Sparkles size=24 />
                    </span>
                    <span class="brand-name">{BRAND}</span>
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=item.anchor() class="nav-link" on:click=close_menu>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <CtaButton action=CtaAction::GetStarted class="btn btn-dark btn-sm" />
                </div>

                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-controls="mobile-menu"
                    aria-expanded=move || if menu.get().is_open() { "true" } else { "false" }
                    on:click=toggle_menu
                >
                    {move || {
                        let glyph = if menu.get().is_open() { Glyph::X } else { Glyph::Menu };
                        view! { <Icon glyph=glyph size=24 /> }
                    }}
                </button>
            </div>

            // Stays mounted until the exit transition settles
            <Show when=move || panel_present.get()>
                <div id="mobile-menu" class="mobile-menu" style=move || panel_pose.get().style()>
                    <div class="mobile-menu-inner">
                        {NAV_LINKS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a href=item.anchor() class="mobile-link" on:click=close_menu>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <CtaButton action=CtaAction::GetStarted class="btn btn-brand btn-block" />
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 20.0;

    #[test]
    fn compact_only_past_threshold() {
        assert_eq!(NavStyle::from_offset(0.0, THRESHOLD), NavStyle::Tall);
        assert_eq!(NavStyle::from_offset(20.0, THRESHOLD), NavStyle::Tall);
        assert_eq!(NavStyle::from_offset(21.0, THRESHOLD), NavStyle::Compact);
        assert_eq!(NavStyle::from_offset(5000.0, THRESHOLD), NavStyle::Compact);
    }

    #[test]
    fn compact_iff_offset_exceeds_threshold() {
        for offset in (0..=200).map(|px| px as f64 * 0.5) {
            let compact = NavStyle::from_offset(offset, THRESHOLD) == NavStyle::Compact;
            assert_eq!(compact, offset > THRESHOLD, "offset {offset}");
        }
    }

    #[test]
    fn style_classes_differ() {
        assert_ne!(NavStyle::Tall.class(), NavStyle::Compact.class());
        assert!(NavStyle::Compact.class().contains("nav-compact"));
    }

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn double_toggle_returns_to_closed() {
        assert_eq!(MenuState::Closed.toggle().toggle(), MenuState::Closed);
        assert!(MenuState::Closed.toggle().is_open());
    }

    #[test]
    fn link_activation_always_closes() {
        assert_eq!(MenuState::Open.on_link_activated(), MenuState::Closed);
        assert_eq!(MenuState::Closed.on_link_activated(), MenuState::Closed);
    }
}
