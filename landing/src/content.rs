//! Literal page content.
//!
//! Sections render these lists in order; nothing here changes at runtime.

use crate::icons::Glyph;

pub const BRAND: &str = "Lumina";
pub const BRAND_TAGLINE: &str =
    "Empowering creative minds to build the next generation of digital experiences.";
pub const COPYRIGHT: &str = "© 2026 Lumina Creative Inc. All rights reserved.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLinkItem {
    pub label: &'static str,
}

impl NavLinkItem {
    /// Same-page anchor: `#` + lowercased label.
    pub fn anchor(&self) -> String {
        format!("#{}", self.label.to_lowercase())
    }
}

pub const NAV_LINKS: [NavLinkItem; 4] = [
    NavLinkItem { label: "Features" },
    NavLinkItem { label: "Solutions" },
    NavLinkItem { label: "Pricing" },
    NavLinkItem { label: "About" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureItem {
    pub glyph: Glyph,
    /// Colour class for the icon
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureItem; 4] = [
    FeatureItem {
        glyph: Glyph::Zap,
        accent: "accent-brand",
        title: "Lightning Fast",
        description: "Optimized for speed. Your projects load instantly and run smoother than ever before.",
    },
    FeatureItem {
        glyph: Glyph::Layers,
        accent: "accent-indigo",
        title: "Infinite Layers",
        description: "Complex designs made simple with our intuitive layer management and grouping system.",
    },
    FeatureItem {
        glyph: Glyph::Shield,
        accent: "accent-emerald",
        title: "Bank-grade Security",
        description: "Your data is encrypted and protected with the highest security standards in the industry.",
    },
    FeatureItem {
        glyph: Glyph::Globe,
        accent: "accent-blue",
        title: "Global CDN",
        description: "Deploy your work to our global network and reach users anywhere in milliseconds.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    /// Pre-formatted for display
    pub value: &'static str,
}

pub const STATS: [StatTile; 4] = [
    StatTile { label: "Active Users", value: "250K+" },
    StatTile { label: "Projects Created", value: "1.2M" },
    StatTile { label: "Countries", value: "120+" },
    StatTile { label: "Uptime", value: "99.99%" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str) -> FooterLink {
    FooterLink { label, href: "#" }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLinkColumn {
    pub heading: &'static str,
    pub links: [FooterLink; 4],
}

pub const FOOTER_COLUMNS: [FooterLinkColumn; 3] = [
    FooterLinkColumn {
        heading: "Product",
        links: [link("Features"), link("Integrations"), link("Pricing"), link("Changelog")],
    },
    FooterLinkColumn {
        heading: "Company",
        links: [link("About Us"), link("Careers"), link("Blog"), link("Contact")],
    },
    FooterLinkColumn {
        heading: "Legal",
        links: [
            link("Privacy Policy"),
            link("Terms of Service"),
            link("Cookie Policy"),
            link("Security"),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub glyph: Glyph,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { glyph: Glyph::Twitter, label: "Twitter", href: "#" },
    SocialLink { glyph: Glyph::Github, label: "GitHub", href: "#" },
    SocialLink { glyph: Glyph::Linkedin, label: "LinkedIn", href: "#" },
];

pub const LEGAL_BAR_LINKS: [FooterLink; 3] = [link("Status"), link("Support"), link("API Docs")];

/// Call-to-action buttons. None of them is wired to anything yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaAction {
    GetStarted,
    StartBuildingFree,
    ViewDemo,
    GetStartedNow,
    ContactSales,
}

impl CtaAction {
    pub fn label(self) -> &'static str {
        match self {
            CtaAction::GetStarted => "Get Started",
            CtaAction::StartBuildingFree => "Start Building Free",
            CtaAction::ViewDemo => "View Demo",
            CtaAction::GetStartedNow => "Get Started Now",
            CtaAction::ContactSales => "Contact Sales",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_links_derive_lowercase_anchors() {
        let anchors: Vec<String> = NAV_LINKS.iter().map(NavLinkItem::anchor).collect();
        assert_eq!(anchors, vec!["#features", "#solutions", "#pricing", "#about"]);
    }

    #[test]
    fn features_keep_fixed_order() {
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec!["Lightning Fast", "Infinite Layers", "Bank-grade Security", "Global CDN"]
        );
    }

    #[test]
    fn stats_keep_literal_values_in_order() {
        let values: Vec<&str> = STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["250K+", "1.2M", "120+", "99.99%"]);
    }

    #[test]
    fn footer_has_three_columns_of_four_links() {
        let headings: Vec<&str> = FOOTER_COLUMNS.iter().map(|c| c.heading).collect();
        assert_eq!(headings, vec!["Product", "Company", "Legal"]);
        assert!(FOOTER_COLUMNS.iter().all(|c| c.links.len() == 4));
    }

    #[test]
    fn cta_labels_match_button_copy() {
        assert_eq!(CtaAction::GetStarted.label(), "Get Started");
        assert_eq!(CtaAction::ContactSales.label(), "Contact Sales");
        assert_eq!(CtaAction::GetStartedNow.label(), "Get Started Now");
    }
}
