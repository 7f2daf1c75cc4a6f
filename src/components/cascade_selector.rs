//! Regional -> Centro -> Inventario -> Bien dropdown chain.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the fetches behind `CascadeState`: regionals on mount, then the
//! child list each selection asks for. The last chosen regional is kept in
//! `localStorage` and restored on the next visit.
//!
//! ERROR HANDLING
//! ==============
//! A failed child fetch stops that level's spinner and raises a toast; the
//! parent selection stays so the user can retry by re-selecting it.

use leptos::prelude::*;

use crate::components::select_field::SelectField;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::state::selector::{CascadeFetch, CascadeLevel, CascadeState};
use crate::state::toast::{Notifier, ToastState};
use crate::util::storage;

const LAST_REGIONAL_KEY: &str = "sgdis.last_regional";
/// Items requested per inventory when filling the item dropdown.
const ITEM_OPTIONS_LIMIT: usize = 500;

#[component]
pub fn CascadeSelector(
    state: RwSignal<CascadeState>,
    /// Deepest level rendered.
    #[prop(default = CascadeLevel::Item)]
    depth: CascadeLevel,
) -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let toasts = expect_context::<RwSignal<ToastState>>();

    let run = move |fetch: Option<CascadeFetch>| {
        if let Some(fetch) = fetch {
            run_fetch(client.get_value(), toasts, state, fetch);
        }
    };

    if state.get_untracked().regionals.is_empty() {
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match api::fetch_regionals(&client).await {
                Ok(regionals) => {
                    let mut fetch = None;
                    state.update(|s| {
                        s.set_regionals(regionals);
                        let remembered = storage::load_json::<i64>(LAST_REGIONAL_KEY);
                        if s.regional_id.is_none() && remembered.is_some_and(|id| s.regionals.iter().any(|r| r.id == id)) {
                            fetch = s.select_regional(remembered);
                        }
                    });
                    if let Some(fetch) = fetch {
                        run_fetch(client, toasts, state, fetch);
                    }
                }
                Err(e) => toasts.api_error("No se pudieron cargar las regionales", &e),
            }
        });
    }

    let on_regional = Callback::new(move |id: Option<i64>| {
        if let Some(id) = id {
            storage::save_json(LAST_REGIONAL_KEY, &id);
        }
        let mut fetch = None;
        state.update(|s| fetch = s.select_regional(id));
        run(fetch);
    });
    let on_institution = Callback::new(move |id: Option<i64>| {
        let mut fetch = None;
        state.update(|s| fetch = s.select_institution(id));
        run(fetch);
    });
    let on_inventory = Callback::new(move |id: Option<i64>| {
        let mut fetch = None;
        state.update(|s| fetch = s.select_inventory(id));
        run(fetch);
    });
    let on_item = Callback::new(move |id: Option<i64>| state.update(|s| s.select_item(id)));

    let shows = move |level: CascadeLevel| level_rank(level) <= level_rank(depth);
    let disabled = move |level: CascadeLevel| {
        Signal::derive(move || {
            let s = state.get();
            !s.is_enabled(level) || s.loading == Some(level)
        })
    };

    view! {
        <div class="cascade-selector">
            <SelectField
                label="Regional"
                options=Signal::derive(move || state.get().regionals.iter().map(|r| (r.id, r.name.clone())).collect::<Vec<_>>())
                selected=Signal::derive(move || state.get().regional_id)
                on_select=on_regional
                searchable=true
            />
            <Show when=move || shows(CascadeLevel::Institution)>
                <SelectField
                    label="Centro"
                    options=Signal::derive(move || {
                        state.get().institutions.iter().map(|i| (i.id, i.name.clone())).collect::<Vec<_>>()
                    })
                    selected=Signal::derive(move || state.get().institution_id)
                    on_select=on_institution
                    disabled=disabled(CascadeLevel::Institution)
                    searchable=true
                />
            </Show>
            <Show when=move || shows(CascadeLevel::Inventory)>
                <SelectField
                    label="Inventario"
                    options=Signal::derive(move || {
                        state.get().inventories.iter().map(|i| (i.id, i.name.clone())).collect::<Vec<_>>()
                    })
                    selected=Signal::derive(move || state.get().inventory_id)
                    on_select=on_inventory
                    disabled=disabled(CascadeLevel::Inventory)
                    searchable=true
                />
            </Show>
            <Show when=move || shows(CascadeLevel::Item)>
                <SelectField
                    label="Bien"
                    options=Signal::derive(move || {
                        state.get().items.iter().map(|i| (i.id, i.to_ref().display())).collect::<Vec<_>>()
                    })
                    selected=Signal::derive(move || state.get().item_id)
                    on_select=on_item
                    disabled=disabled(CascadeLevel::Item)
                    searchable=true
                />
            </Show>
        </div>
    }
}

fn level_rank(level: CascadeLevel) -> u8 {
    match level {
        CascadeLevel::Regional => 0,
        CascadeLevel::Institution => 1,
        CascadeLevel::Inventory => 2,
        CascadeLevel::Item => 3,
    }
}

fn run_fetch(client: ApiClient, toasts: RwSignal<ToastState>, state: RwSignal<CascadeState>, fetch: CascadeFetch) {
    leptos::task::spawn_local(async move {
        match fetch {
            CascadeFetch::Institutions(id) => match api::fetch_institutions(&client, id).await {
                Ok(list) => state.update(|s| {
                    s.accept_institutions(id, list);
                }),
                Err(e) => {
                    state.update(|s| s.fetch_failed(CascadeLevel::Institution));
                    toasts.api_error("No se pudieron cargar los centros", &e);
                }
            },
            CascadeFetch::Inventories(id) => match api::fetch_institution_inventories(&client, id).await {
                Ok(list) => state.update(|s| {
                    s.accept_inventories(id, list);
                }),
                Err(e) => {
                    state.update(|s| s.fetch_failed(CascadeLevel::Inventory));
                    toasts.api_error("No se pudieron cargar los inventarios", &e);
                }
            },
            CascadeFetch::Items(id) => match api::fetch_inventory_items(&client, id, 0, ITEM_OPTIONS_LIMIT).await {
                Ok(page) => state.update(|s| {
                    s.accept_items(id, page.content);
                }),
                Err(e) => {
                    state.update(|s| s.fetch_failed(CascadeLevel::Item));
                    toasts.api_error("No se pudieron cargar los bienes", &e);
                }
            },
        }
    });
}
