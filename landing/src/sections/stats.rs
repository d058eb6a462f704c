use leptos::prelude::*;

use crate::content::STATS;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="stats-dots" aria-hidden="true"></div>
            <div class="container">
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat-tile">
                                    <div class="stat-value">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
