//! Inline SVG glyphs, looked up by name.
//!
//! Path data follows the 24x24 stroke icon grid used across the page.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sparkles,
    Zap,
    Layers,
    Shield,
    Globe,
    Menu,
    X,
    ArrowRight,
    CheckCircle,
    Github,
    Twitter,
    Linkedin,
}

impl Glyph {
    pub const ALL: [Glyph; 12] = [
        Glyph::Sparkles,
        Glyph::Zap,
        Glyph::Layers,
        Glyph::Shield,
        Glyph::Globe,
        Glyph::Menu,
        Glyph::X,
        Glyph::ArrowRight,
        Glyph::CheckCircle,
        Glyph::Github,
        Glyph::Twitter,
        Glyph::Linkedin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Glyph::Sparkles => "sparkles",
            Glyph::Zap => "zap",
            Glyph::Layers => "layers",
            Glyph::Shield => "shield",
            Glyph::Globe => "globe",
            Glyph::Menu => "menu",
            Glyph::X => "x",
            Glyph::ArrowRight => "arrow-right",
            Glyph::CheckCircle => "check-circle",
            Glyph::Github => "github",
            Glyph::Twitter => "twitter",
            Glyph::Linkedin => "linkedin",
        }
    }

    pub fn from_name(name: &str) -> Option<Glyph> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Sparkles => &[
                "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
            Glyph::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
            Glyph::Layers => &[
                "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            Glyph::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Glyph::Globe => &[
                "M22 12A10 10 0 1 1 2 12a10 10 0 0 1 20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Glyph::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Glyph::X => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Glyph::CheckCircle => &["M21.801 10A10 10 0 1 1 17 3.335", "m9 11 3 3L22 4"],
            Glyph::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Glyph::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Glyph::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0 2 2 0 0 1 4 0",
            ],
        }
    }
}

/// Renders `glyph` as a `size`-pixel square stroke icon.
#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            class=class
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-glyph=glyph.name()
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_round_trips_every_glyph() {
        for glyph in Glyph::ALL {
            assert_eq!(Glyph::from_name(glyph.name()), Some(glyph));
        }
    }

    #[test]
    fn unknown_name_has_no_glyph() {
        assert_eq!(Glyph::from_name("rocket"), None);
        assert_eq!(Glyph::from_name("Zap"), None);
    }

    #[test]
    fn every_glyph_has_path_data() {
        assert!(Glyph::ALL.iter().all(|g| !g.paths().is_empty()));
    }
}
