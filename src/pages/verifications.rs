//! Physical verifications of items, grouped by regional.
//!
//! SYSTEM CONTEXT
//! ==============
//! Choosing a regional loads its verifications; the inventory, status,
//! search and date filters then narrow locally. A new verification starts
//! from a licence plate: the item is looked up first, and its inventory
//! is taken from the lookup result.
//!
//! ERROR HANDLING
//! ==============
//! Create and upload failures stay inside their modal; a 404 on the plate
//! lookup is rewritten to name the plate that was not found.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::file_picker::{selected_file, FilePicker, IMAGE_ACCEPT};
use crate::components::list_controls::{DateRangeSelect, ListStatus};
use crate::components::modal::{Modal, ModalActions, ModalError};
use crate::components::pager::Pager;
use crate::components::select_field::SelectField;
use crate::components::stat_cards::StatCards;
use crate::error::ApiError;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{Regional, Verification, VerificationStatus};
use crate::state::modal::ModalState;
use crate::state::toast::{Notifier, ToastState};
use crate::state::verifications::{create_request, normalize_plate, plate_lookup_message, VerificationsState};
use crate::util::date_range::DateRange;
use crate::util::search::SearchTerm;
use crate::util::{clock, format};

#[component]
pub fn VerificationsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let state = RwSignal::new(VerificationsState::default());
    let regionals = RwSignal::new(Vec::<Regional>::new());
    let create = RwSignal::new(ModalState::<()>::default());
    let plate = RwSignal::new(String::new());
    let evidence = RwSignal::new(ModalState::<i64>::default());
    let file_ref = NodeRef::<leptos::html::Input>::new();

    {
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match api::fetch_regionals(&client).await {
                Ok(list) => regionals.set(list),
                Err(e) => toasts.api_error("No se pudieron cargar las regionales", &e),
            }
        });
    }

    let on_regional = Callback::new(move |id: Option<i64>| {
        if state.try_update(|s| s.select_regional(id)).unwrap_or(false) {
            load(client.get_value(), state, toasts);
        }
    });
    let reload = move || load(client.get_value(), state, toasts);

    let on_page = Callback::new(move |page: usize| {
        state.update(|s| {
            s.list.go_to_page(page);
        });
    });

    let open_create = move |_| {
        plate.set(String::new());
        create.update(|m| m.open(()));
    };
    let close_create = Callback::new(move |()| create.update(ModalState::close));
    let submit_create = Callback::new(move |()| {
        let normalized = match normalize_plate(&plate.get_untracked()) {
            Ok(normalized) => normalized,
            Err(e) => {
                create.update(|m| m.error = Some(e.to_string()));
                return;
            }
        };
        if !create.try_update(ModalState::begin_submit).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let result = verify_plate(&client, &normalized).await;
            create.update(|m| m.finish_submit(&result));
            if result.is_ok() {
                toasts.success("Verificación registrada");
                load(client, state, toasts);
            }
        });
    });

    let open_evidence = move |id: i64| evidence.update(|m| m.open(id));
    let close_evidence = Callback::new(move |()| evidence.update(ModalState::close));
    let submit_evidence = Callback::new(move |()| {
        let Some(id) = evidence.get_untracked().target else {
            return;
        };
        let file = match selected_file(file_ref) {
            Ok(file) => file,
            Err(e) => {
                evidence.update(|m| m.error = Some(e.to_string()));
                return;
            }
        };
        if !evidence.try_update(ModalState::begin_submit).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let result = api::upload_verification_evidence(&client, id, &file).await;
            evidence.update(|m| m.finish_submit(&result));
            if result.is_ok() {
                toasts.success(&format!("Evidencia \"{}\" cargada", file.name));
                load(client, state, toasts);
            }
        });
    });

    view! {
        <div class="list-page verifications-page">
            <header class="list-page__header">
                <h1>"Verificaciones"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "+ Nueva verificación"
                </button>
            </header>

            <div class="list-page__scope">
                <SelectField
                    label="Regional"
                    options=Signal::derive(move || {
                        regionals.get().into_iter().map(|r| (r.id, r.name)).collect::<Vec<_>>()
                    })
                    selected=Signal::derive(move || state.get().regional_id)
                    on_select=on_regional
                />
                <SelectField
                    label="Inventario"
                    options=Signal::derive(move || state.get().inventory_options())
                    selected=Signal::derive(move || state.get().filter.inventory_id)
                    on_select=Callback::new(move |id: Option<i64>| {
                        state.update(|s| {
                            s.filter.inventory_id = id;
                            s.refresh(clock::today());
                        });
                    })
                    disabled=Signal::derive(move || state.get().regional_id.is_none())
                    placeholder="Todos los inventarios"
                    searchable=true
                />
            </div>

            <StatCards stats=Signal::derive(move || state.get().stats())/>

            <div class="list-page__filters">
                <select on:change=move |ev| {
                    let status = VerificationStatus::from_code(&event_target_value(&ev));
                    state.update(|s| {
                        s.filter.status = status;
                        s.refresh(clock::today());
                    });
                }>
                    <option value="">"Todos los estados"</option>
                    {VerificationStatus::KNOWN
                        .into_iter()
                        .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <DateRangeSelect on_change=Callback::new(move |range: DateRange| {
                    state.update(|s| {
                        s.filter.date_range = range;
                        s.refresh(clock::today());
                    });
                })/>
                <input
                    type="search"
                    placeholder="Buscar por bien, placa o inventario"
                    on:input=move |ev| {
                        let term = SearchTerm::new(&event_target_value(&ev));
                        state.update(|s| {
                            s.filter.search = term;
                            s.refresh(clock::today());
                        });
                    }
                />
                <button class="btn" disabled=move || state.get().regional_id.is_none() on:click=move |_| reload()>
                    "Recargar"
                </button>
            </div>

            <ListStatus loading=Signal::derive(move || state.get().list.loading) error=Signal::derive(move || state.get().list.error)/>

            <Show
                when=move || state.get().regional_id.is_some()
                fallback=|| view! { <p class="list-page__empty">"Seleccione una regional para ver sus verificaciones."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Bien"</th>
                            <th>"Inventario"</th>
                            <th>"Estado"</th>
                            <th>"Verificado por"</th>
                            <th>"Fecha"</th>
                            <th>"Evidencia"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .get()
                                .list
                                .page_items()
                                .iter()
                                .cloned()
                                .map(|v| verification_row(v, open_evidence))
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <Pager pagination=Signal::derive(move || state.get().list.pagination) on_page=on_page/>

            <Modal
                title="Nueva verificación".to_owned()
                open=Signal::derive(move || create.get().is_open())
                on_close=close_create
            >
                <label class="dialog__label">
                    "Placa del bien"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="SENA-000123"
                        prop:value=move || plate.get()
                        on:input=move |ev| plate.set(event_target_value(&ev))
                    />
                </label>
                <ModalError error=Signal::derive(move || create.get().error)/>
                <ModalActions
                    submit_label="Verificar"
                    submitting=Signal::derive(move || create.get().submitting)
                    on_cancel=close_create
                    on_submit=submit_create
                />
            </Modal>

            <Modal
                title="Cargar evidencia".to_owned()
                open=Signal::derive(move || evidence.get().is_open())
                on_close=close_evidence
            >
                <FilePicker label="Fotografía" accept=IMAGE_ACCEPT node_ref=file_ref/>
                <ModalError error=Signal::derive(move || evidence.get().error)/>
                <ModalActions
                    submit_label="Cargar"
                    submitting=Signal::derive(move || evidence.get().submitting)
                    on_cancel=close_evidence
                    on_submit=submit_evidence
                />
            </Modal>
        </div>
    }
}

/// Look the plate up, then create the verification for the found item.
async fn verify_plate(client: &ApiClient, plate: &str) -> Result<(), ApiError> {
    let item = api::fetch_item_by_plate(client, plate)
        .await
        .map_err(|e| ApiError::validation(plate_lookup_message(plate, &e)))?;
    let request = create_request(&item)?;
    api::create_verification(client, &request).await.map(|_| ())
}

fn load(client: ApiClient, state: RwSignal<VerificationsState>, toasts: RwSignal<ToastState>) {
    let Some(regional_id) = state.try_update(VerificationsState::begin_load).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = api::fetch_regional_verifications(&client, regional_id).await;
        if let Err(e) = &result {
            toasts.api_error("No se pudieron cargar las verificaciones", e);
        }
        let result = result.map_err(|e| e.to_string());
        let again = state.try_update(|s| s.finish_load(regional_id, result, clock::today())).unwrap_or(false);
        if again {
            load(client, state, toasts);
        }
    });
}

fn verification_row(v: Verification, open_evidence: impl Fn(i64) + Copy + Send + Sync + 'static) -> impl IntoView {
    let id = v.id;
    let photo = v.photo_url.clone();
    view! {
        <tr>
            <td>{v.item.display()}</td>
            <td>{v.inventory_name.unwrap_or_else(|| format!("Inventario {}", v.inventory_id))}</td>
            <td>
                <span class=format!("badge badge--{}", v.status.code().to_lowercase())>{v.status.label()}</span>
            </td>
            <td>{v.user.map(|u| u.full_name).unwrap_or_default()}</td>
            <td>{format::date_time(v.created_at)}</td>
            <td class="data-table__actions">
                {match photo {
                    Some(url) => view! { <a href=url target="_blank" rel="noopener">"Ver foto"</a> }.into_any(),
                    None => {
                        view! {
                            <button class="btn" on:click=move |_| open_evidence(id)>
                                "Cargar"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </td>
        </tr>
    }
}
