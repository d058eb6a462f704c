use leptos::prelude::*;

use super::CtaButton;
use crate::content::CtaAction;
use crate::icons::{Glyph, Icon};

const TRUST_BADGES: [&str; 2] = ["No credit card required", "Cancel anytime"];

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container">
                <div class="cta-panel">
                    <div class="cta-glow" aria-hidden="true">
                        <div class="cta-glow-light"></div>
                        <div class="cta-glow-indigo"></div>
                    </div>

                    <div class="cta-content">
                        <h2 class="cta-title">
                            "Ready to transform your "
                            <br />
                            "creative workflow?"
                        </h2>
                        <p class="cta-description">
                            "Join over 250,000 creators who are building the future with Lumina. "
                            "Start your 14-day free trial today."
                        </p>
                        <div class="cta-actions">
                            <CtaButton action=CtaAction::GetStartedNow class="btn btn-white btn-xl" />
                            <CtaButton action=CtaAction::ContactSales class="btn btn-glass btn-xl" />
                        </div>
                        <div class="cta-badges">
                            {TRUST_BADGES
                                .iter()
                                .map(|badge| {
                                    view! {
                                        <div class="cta-badge">
                                            <Icon glyph=Glyph::CheckCircle size=18 />
                                            {*badge}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
