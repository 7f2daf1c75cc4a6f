//! Item loans: pick an item through the cascade, lend it, return it.
//!
//! SYSTEM CONTEXT
//! ==============
//! With no item selected the page lists every loan; selecting an item
//! narrows the list to that item's loans and enables lending. After each
//! lend `api::lend_item` removes a double submission if one slipped past
//! the idempotency key.

use leptos::prelude::*;

use super::FETCH_ALL;
use crate::components::cascade_selector::CascadeSelector;
use crate::components::list_controls::{DateRangeSelect, ListStatus};
use crate::components::modal::{Modal, ModalActions, ModalError};
use crate::components::pager::Pager;
use crate::components::select_field::SelectField;
use crate::components::stat_cards::StatCards;
use crate::error::ApiError;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{Loan, User};
use crate::state::loans::{LendForm, LoanStatusFilter, LoansState};
use crate::state::modal::ModalState;
use crate::state::selector::CascadeState;
use crate::state::toast::{Notifier, ToastState};
use crate::util::date_range::DateRange;
use crate::util::search::SearchTerm;
use crate::util::{clock, format};

#[component]
pub fn LoansPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let state = RwSignal::new(LoansState::default());
    let cascade = RwSignal::new(CascadeState::default());
    let lend = RwSignal::new(ModalState::<i64>::default());
    let lend_form = RwSignal::new(LendForm::default());
    let candidates = RwSignal::new(Vec::<User>::new());
    let give_back = RwSignal::new(ModalState::<i64>::default());
    let return_details = RwSignal::new(String::new());

    // Item selection drives both the query and the local item filter.
    let selected_item = Memo::new(move |_| cascade.get().item_id);
    Effect::new(move || {
        let item_id = selected_item.get();
        state.update(|s| s.filter.item_id = item_id);
        load(client.get_value(), state, toasts);
    });

    let reload = move || load(client.get_value(), state, toasts);

    let on_page = Callback::new(move |page: usize| {
        state.update(|s| {
            s.list.go_to_page(page);
        });
    });

    let can_lend = move || {
        let item_id = cascade.get().item_id;
        let state = state.get();
        !state.list.loading && item_id.is_some_and(|id| !state.has_open_loan(id))
    };

    let open_lend = move |_| {
        let Some(item_id) = cascade.get_untracked().item_id else {
            return;
        };
        lend_form.set(LendForm::default());
        lend.update(|m| m.open(item_id));
        if candidates.get_untracked().is_empty() {
            let client = client.get_value();
            leptos::task::spawn_local(async move {
                match api::fetch_users(&client, 0, FETCH_ALL).await {
                    Ok(page) => candidates.set(page.content.into_iter().filter(|u| u.status).collect()),
                    Err(e) => toasts.api_error("No se pudieron cargar los usuarios", &e),
                }
            });
        }
    };
    let close_lend = Callback::new(move |()| lend.update(ModalState::close));
    let submit_lend = Callback::new(move |()| {
        let request = match lend_form.get_untracked().to_request(lend.get_untracked().target) {
            Ok(request) => request,
            Err(e) => {
                toasts.api_error("Préstamo", &e);
                return;
            }
        };
        if !lend.try_update(ModalState::begin_submit).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let result = api::lend_item(&client, &request).await;
            let status = result.as_ref().map(|_| ()).map_err(ApiError::clone);
            lend.update(|m| m.finish_submit(&status));
            match result {
                Ok(outcome) => {
                    toasts.success("Préstamo registrado");
                    if outcome.removed_duplicate.is_some() {
                        toasts.info("Se eliminó un préstamo duplicado");
                    }
                    load(client, state, toasts);
                }
                Err(e) => toasts.api_error("No se pudo registrar el préstamo", &e),
            }
        });
    });

    let open_return = move |loan_id: i64| {
        return_details.set(String::new());
        give_back.update(|m| m.open(loan_id));
    };
    let close_return = Callback::new(move |()| give_back.update(ModalState::close));
    let submit_return = Callback::new(move |()| {
        let Some(loan_id) = give_back.get_untracked().target else {
            return;
        };
        if !give_back.try_update(ModalState::begin_submit).unwrap_or(false) {
            return;
        }
        let request = LoansState::return_request(loan_id, &return_details.get_untracked());
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let result = api::return_item(&client, &request).await;
            give_back.update(|m| m.finish_submit(&result));
            match result {
                Ok(()) => {
                    toasts.success("Devolución registrada");
                    load(client, state, toasts);
                }
                Err(e) => toasts.api_error("No se pudo registrar la devolución", &e),
            }
        });
    });

    view! {
        <div class="list-page loans-page">
            <header class="list-page__header">
                <h1>"Préstamos"</h1>
                <button class="btn btn--primary" disabled=move || !can_lend() on:click=open_lend>
                    "+ Prestar bien"
                </button>
            </header>

            <CascadeSelector state=cascade/>

            <StatCards stats=Signal::derive(move || state.get().stats())/>

            <div class="list-page__filters">
                <select on:change=move |ev| {
                    let status = LoanStatusFilter::from_code(&event_target_value(&ev));
                    state.update(|s| {
                        s.filter.status = status;
                        s.refresh(clock::today());
                    });
                }>
                    <option value="all">"Todos"</option>
                    <option value="active">"Activos"</option>
                    <option value="returned">"Devueltos"</option>
                </select>
                <DateRangeSelect on_change=Callback::new(move |range: DateRange| {
                    state.update(|s| {
                        s.filter.date_range = range;
                        s.refresh(clock::today());
                    });
                })/>
                <input
                    type="search"
                    placeholder="Buscar por bien, responsable o detalle"
                    on:input=move |ev| {
                        let term = SearchTerm::new(&event_target_value(&ev));
                        state.update(|s| {
                            s.filter.search = term;
                            s.refresh(clock::today());
                        });
                    }
                />
                <button class="btn" on:click=move |_| reload()>
                    "Recargar"
                </button>
            </div>

            <ListStatus loading=Signal::derive(move || state.get().list.loading) error=Signal::derive(move || state.get().list.error)/>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Bien"</th>
                        <th>"Responsable"</th>
                        <th>"Prestado por"</th>
                        <th>"Préstamo"</th>
                        <th>"Devolución"</th>
                        <th>"Estado"</th>
                        <th>"Acciones"</th>
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
                            .map(|loan| loan_row(loan, open_return))
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Pager pagination=Signal::derive(move || state.get().list.pagination) on_page=on_page/>

            <Modal title="Prestar bien".to_owned() open=Signal::derive(move || lend.get().is_open()) on_close=close_lend>
                <p class="dialog__label">
                    {move || cascade.get().selected_item().map(|i| i.to_ref().display()).unwrap_or_default()}
                </p>
                <SelectField
                    label="Responsable"
                    options=Signal::derive(move || {
                        candidates.get().iter().map(|u| (u.id, format!("{} ({})", u.full_name, u.email))).collect::<Vec<_>>()
                    })
                    selected=Signal::derive(move || lend_form.get().responsible_id)
                    on_select=Callback::new(move |id: Option<i64>| lend_form.update(|f| f.responsible_id = id))
                    searchable=true
                />
                <label class="dialog__label">
                    "Detalles (opcional)"
                    <textarea
                        class="dialog__input"
                        prop:value=move || lend_form.get().details
                        on:input=move |ev| {
                            let details = event_target_value(&ev);
                            lend_form.update(|f| f.details = details);
                        }
                    ></textarea>
                </label>
                <ModalError error=Signal::derive(move || lend.get().error)/>
                <ModalActions
                    submit_label="Prestar"
                    submitting=Signal::derive(move || lend.get().submitting)
                    on_cancel=close_lend
                    on_submit=submit_lend
                />
            </Modal>

            <Modal
                title="Registrar devolución".to_owned()
                open=Signal::derive(move || give_back.get().is_open())
                on_close=close_return
            >
                <label class="dialog__label">
                    "Observaciones de la devolución"
                    <textarea
                        class="dialog__input"
                        prop:value=move || return_details.get()
                        on:input=move |ev| return_details.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <ModalError error=Signal::derive(move || give_back.get().error)/>
                <ModalActions
                    submit_label="Registrar"
                    submitting=Signal::derive(move || give_back.get().submitting)
                    on_cancel=close_return
                    on_submit=submit_return
                />
            </Modal>
        </div>
    }
}

fn load(client: ApiClient, state: RwSignal<LoansState>, toasts: RwSignal<ToastState>) {
    let Some(query) = state.try_update(LoansState::begin_load).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = api::filter_loans(&client, &query).await;
        if let Err(e) = &result {
            toasts.api_error("No se pudieron cargar los préstamos", e);
        }
        let result = result.map_err(|e| e.to_string());
        let again = state.try_update(|s| s.finish_load(&query, result, clock::today())).unwrap_or(false);
        if again {
            load(client, state, toasts);
        }
    });
}

fn loan_row(loan: Loan, open_return: impl Fn(i64) + Copy + Send + Sync + 'static) -> impl IntoView {
    let id = loan.id;
    let returned = loan.returned;
    view! {
        <tr>
            <td>{loan.item.display()}</td>
            <td>{loan.responsible.full_name}</td>
            <td>{loan.lender.map(|l| l.full_name).unwrap_or_default()}</td>
            <td>{format::date_time(loan.lend_at)}</td>
            <td>{format::opt_date_time(loan.return_at)}</td>
            <td>
                <span class=if returned { "badge badge--returned" } else { "badge badge--active" }>
                    {if returned { "Devuelto" } else { "Activo" }}
                </span>
            </td>
            <td class="data-table__actions">
                <Show when=move || !returned>
                    <button class="btn" on:click=move |_| open_return(id)>
                        "Devolver"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
