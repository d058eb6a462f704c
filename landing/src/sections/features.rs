use leptos::prelude::*;

use crate::content::{FEATURES, FeatureItem};
use crate::icons::Icon;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Everything you need to scale"</h2>
                    <p class="section-description">
                        "Powerful tools designed to help you build better products, faster."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES.iter().map(|feature| view! { <FeatureCard feature=*feature /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

// Hover lift is a CSS transform on .feature-card
#[component]
fn FeatureCard(feature: FeatureItem) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">
                <Icon glyph=feature.glyph size=24 class=feature.accent />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
