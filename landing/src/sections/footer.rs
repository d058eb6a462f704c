use leptos::prelude::*;

use crate::content::{
    BRAND, BRAND_TAGLINE, COPYRIGHT, FOOTER_COLUMNS, FooterLinkColumn, LEGAL_BAR_LINKS, SOCIAL_LINKS,
};
use crate::icons::{Glyph, Icon};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span class="brand-mark brand-mark-sm">
                                <Icon glyph=Glyph::Sparkles size=18 />
                            </span>
                            <span class="footer-title">{BRAND}</span>
                        </div>
                        <p class="footer-tagline">{BRAND_TAGLINE}</p>
                        <div class="footer-social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a href=social.href class="social-link" aria-label=social.label>
                                            <Icon glyph=social.glyph size=18 />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS.iter().map(|column| view! { <LinkColumn column=*column /> }).collect_view()}
                </div>

                <div class="footer-legal">
                    <p class="footer-copyright">{COPYRIGHT}</p>
                    <div class="footer-legal-links">
                        {LEGAL_BAR_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.href class="footer-legal-link">{link.label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(column: FooterLinkColumn) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">{column.heading}</h4>
            <ul class="footer-links">
                {column
                    .links
                    .iter()
                    .map(|link| view! { <li><a href=link.href class="footer-link">{link.label}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
