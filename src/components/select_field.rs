//! Dropdown with an optional search box, used for every entity picker
//! (regional, centro, inventario, bien, usuario).

#[cfg(test)]
#[path = "select_field_test.rs"]
mod select_field_test;

use leptos::prelude::*;

use crate::util::search::SearchTerm;

/// Options matching `term`, always keeping the current selection so the
/// `<select>` never silently drops it.
pub fn visible_options(options: &[(i64, String)], term: &SearchTerm, selected: Option<i64>) -> Vec<(i64, String)> {
    options
        .iter()
        .filter(|(id, label)| Some(*id) == selected || term.matches([label.as_str()]))
        .cloned()
        .collect()
}

/// `<option>` values are ids; the empty placeholder means no selection.
pub fn parse_option_value(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<(i64, String)>>,
    #[prop(into)] selected: Signal<Option<i64>>,
    on_select: Callback<Option<i64>>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(into, default = "Seleccione...".to_owned())] placeholder: String,
    #[prop(optional)] searchable: bool,
) -> impl IntoView {
    let term = RwSignal::new(SearchTerm::default());
    let visible = move || visible_options(&options.get(), &term.get(), selected.get());

    view! {
        <label class="select-field">
            <span class="select-field__label">{label}</span>
            <Show when=move || searchable>
                <input
                    class="select-field__search"
                    type="search"
                    placeholder="Buscar..."
                    disabled=move || disabled.get()
                    prop:value=move || term.get().as_str().to_owned()
                    on:input=move |ev| term.set(SearchTerm::new(&event_target_value(&ev)))
                />
            </Show>
            <select
                class="select-field__select"
                disabled=move || disabled.get()
                on:change=move |ev| on_select.run(parse_option_value(&event_target_value(&ev)))
            >
                <option value="" selected=move || selected.get().is_none()>
                    {placeholder}
                </option>
                {move || {
                    visible()
                        .into_iter()
                        .map(|(id, name)| {
                            view! {
                                <option value=id.to_string() selected=move || selected.get() == Some(id)>
                                    {name}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}
