//! Small controls shared by the list pages.

use leptos::prelude::*;

use crate::util::date_range::DateRange;

/// Date-range `<select>` shared by the dated list pages.
#[component]
pub fn DateRangeSelect(on_change: Callback<DateRange>) -> impl IntoView {
    view! {
        <select on:change=move |ev| on_change.run(DateRange::from_code(&event_target_value(&ev)))>
            {DateRange::ALL
                .into_iter()
                .map(|r| view! { <option value=r.code()>{r.label()}</option> })
                .collect::<Vec<_>>()}
        </select>
    }
}

/// Loading line and load error banner above a list.
#[component]
pub fn ListStatus(#[prop(into)] loading: Signal<bool>, #[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="list-page__loading">"Cargando..."</p>
        </Show>
        <Show when=move || error.get().is_some()>
            <p class="list-page__error">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}
