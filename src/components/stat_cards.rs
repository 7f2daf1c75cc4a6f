//! Row of statistic cards above a list.

use leptos::prelude::*;

use crate::state::list::Stat;

#[component]
pub fn StatCards(#[prop(into)] stats: Signal<Vec<Stat>>) -> impl IntoView {
    view! {
        <div class="stat-cards">
            {move || {
                stats
                    .get()
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class=format!("stat-card stat-card--{}", stat.tone)>
                                <span class="stat-card__value">{stat.value}</span>
                                <span class="stat-card__label">{stat.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
