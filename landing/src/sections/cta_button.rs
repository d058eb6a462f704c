use leptos::prelude::*;
use tracing::debug;

use crate::content::CtaAction;
use crate::icons::{Glyph, Icon};

/// Call-to-action button. Shows hover/press affordances only; activation is logged.
#[component]
pub fn CtaButton(
    action: CtaAction,
    #[prop(optional, into)] class: String,
    #[prop(optional)] trailing: Option<Glyph>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class
            data-action=action.label()
            on:click=move |_| debug!(?action, "call-to-action activated, no target wired")
        >
            {action.label()}
            {trailing.map(|glyph| view! { <Icon glyph=glyph size=20 class="btn-trailing" /> })}
        </button>
    }
}
