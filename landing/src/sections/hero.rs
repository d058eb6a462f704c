use leptos::prelude::*;
use tracing::warn;

use super::CtaButton;
use crate::config::Settings;
use crate::content::CtaAction;
use crate::icons::{Glyph, Icon};
use crate::motion::{Pose, Reveal, Tween};

const RISE: Pose = Pose::hidden_offset(20.0);
const TEXT_DURATION_MS: f64 = 200.0;

// Text groups cascade 100ms apart and are all settled by 500ms.
pub const BADGE: Tween = Tween::new(RISE, 0.0, TEXT_DURATION_MS);
pub const HEADLINE: Tween = Tween::new(RISE, 100.0, TEXT_DURATION_MS);
pub const SUBCOPY: Tween = Tween::new(RISE, 200.0, TEXT_DURATION_MS);
pub const CTA_ROW: Tween = Tween::new(RISE, 300.0, TEXT_DURATION_MS);
pub const IMAGE: Tween = Tween::new(Pose::hidden_scale(0.95), 400.0, 800.0);

#[component]
pub fn Hero() -> impl IntoView {
    let settings = use_context::<Settings>().unwrap_or_default();

    view! {
        <section class="hero">
            <div class="hero-accents" aria-hidden="true">
                <div class="accent-blob accent-blob-top"></div>
                <div class="accent-blob accent-blob-bottom"></div>
            </div>

            <div class="container">
                <div class="hero-content">
                    <Reveal tween=BADGE>
                        <span class="hero-badge">
                            <Icon glyph=Glyph::Zap size=14 />
                            "New: Lumina AI Engine v2.0"
                        </span>
                    </Reveal>

                    <Reveal tween=HEADLINE>
                        <h1 class="hero-title">
                            "Design the future "
                            <br />
                            <span class="hero-title-gradient">"without limits."</span>
                        </h1>
                    </Reveal>

                    <Reveal tween=SUBCOPY>
                        <p class="hero-description">
                            "The all-in-one platform for creative teams to build, collaborate, "
                            "and deploy stunning digital experiences in record time."
                        </p>
                    </Reveal>

                    <Reveal tween=CTA_ROW class="hero-actions">
                        <CtaButton
                            action=CtaAction::StartBuildingFree
                            class="btn btn-dark btn-lg btn-arrow"
                            trailing=Glyph::ArrowRight
                        />
                        <CtaButton action=CtaAction::ViewDemo class="btn btn-light btn-lg" />
                    </Reveal>

                    <Reveal tween=IMAGE class="hero-visual">
                        <HeroImage url=settings.hero_image_url alt=settings.hero_image_alt />
                        <div class="ornament ornament-top" aria-hidden="true"></div>
                        <div class="ornament ornament-bottom" aria-hidden="true"></div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Image in a frame with a reserved 16:9 box.
///
/// If the image fails to load it is hidden and the frame shows a placeholder
/// at the same size.
#[component]
fn HeroImage(url: String, alt: String) -> impl IntoView {
    let (broken, set_broken) = signal(false);
    let failed_url = url.clone();
    let on_error = move |_| {
        warn!(url = %failed_url, "hero image failed to load");
        set_broken.set(true);
    };

    view! {
        <div class=move || if broken.get() { "hero-frame is-broken" } else { "hero-frame" }>
            <img
                src=url
                alt=alt
                class="hero-image"
                referrerpolicy="no-referrer"
                on:error=on_error
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Phase;

    const TEXT_GROUPS: [Tween; 4] = [BADGE, HEADLINE, SUBCOPY, CTA_ROW];

    #[test]
    fn text_groups_cascade_in_order() {
        let delays: Vec<f64> = TEXT_GROUPS.iter().map(|t| t.delay_ms).collect();
        assert_eq!(delays, vec![0.0, 100.0, 200.0, 300.0]);
    }

    #[test]
    fn text_groups_fully_opaque_by_half_a_second() {
        for tween in TEXT_GROUPS {
            let (phase, pose) = tween.sample(500.0);
            assert_eq!(phase, Phase::Settled);
            assert_eq!(pose.opacity, 1.0);
        }
    }

    #[test]
    fn badge_leads_and_cta_row_trails() {
        // At 250ms the badge is done while the CTA row has not started
        assert_eq!(BADGE.phase(250.0), Phase::Settled);
        assert_eq!(CTA_ROW.phase(250.0), Phase::Pending);
        assert!(HEADLINE.sample(250.0).1.opacity > SUBCOPY.sample(250.0).1.opacity);
    }

    #[test]
    fn image_scales_in_after_text() {
        assert_eq!(IMAGE.from.scale, 0.95);
        assert_eq!(IMAGE.from.opacity, 0.0);
        assert_eq!(IMAGE.phase(399.0), Phase::Pending);
        assert_eq!(IMAGE.sample(1200.0).1, Pose::REST);
    }
}
