//! Cancellation (baja) requests: list, create, approve/refuse, documents.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reviewers (warehouse and admin roles) decide pending requests; any user
//! can file a request by picking items through the cascade selector and
//! attach the signed format or an example document afterwards.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::FETCH_ALL;
use crate::components::cascade_selector::CascadeSelector;
use crate::components::file_picker::{DOCUMENT_ACCEPT, FilePicker, selected_file};
use crate::components::list_controls::{DateRangeSelect, ListStatus};
use crate::components::modal::{Modal, ModalActions, ModalError};
use crate::components::pager::Pager;
use crate::components::stat_cards::StatCards;
use crate::error::ApiError;
use crate::net::api::{self, FormatDocument};
use crate::net::http::ApiClient;
use crate::net::types::{Cancellation, CancellationStatus};
use crate::state::auth::AuthState;
use crate::state::cancellations::{CancellationAction, CancellationDraft, CancellationsState};
use crate::state::modal::ModalState;
use crate::state::selector::CascadeState;
use crate::state::toast::{Notifier, ToastState};
use crate::util::date_range::DateRange;
use crate::util::search::SearchTerm;
use crate::util::{clock, format};

#[component]
pub fn CancellationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let state = RwSignal::new(CancellationsState::default());
    let action = RwSignal::new(ModalState::<CancellationAction>::default());
    let create = RwSignal::new(ModalState::<()>::default());
    let draft = RwSignal::new(CancellationDraft::default());
    let cascade = RwSignal::new(CascadeState::default());
    let comment = RwSignal::new(String::new());
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let reload = move || load(client.get_value(), state, toasts);
    reload();

    let on_page = Callback::new(move |page: usize| {
        state.update(|s| {
            s.list.go_to_page(page);
        });
    });

    let open_action = move |target: CancellationAction| {
        comment.set(String::new());
        action.update(|m| m.open(target));
    };
    let close_action = Callback::new(move |()| action.update(ModalState::close));

    let submit_action = Callback::new(move |()| {
        let Some(target) = action.get_untracked().target else {
            return;
        };
        let file = match target {
            CancellationAction::Upload(..) => match selected_file(file_ref) {
                Ok(file) => Some(file),
                Err(e) => {
                    toasts.api_error(target.title(), &e);
                    return;
                }
            },
            _ => None,
        };
        if !action.try_update(ModalState::begin_submit).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        let text = comment.get_untracked();
        leptos::task::spawn_local(async move {
            let result = match (target, file) {
                (CancellationAction::Approve(id), _) => api::approve_cancellation(&client, id, Some(text)).await,
                (CancellationAction::Refuse(id), _) => api::refuse_cancellation(&client, id, &text).await,
                (CancellationAction::Upload(id, document), Some(file)) => {
                    api::upload_cancellation_document(&client, id, document, &file).await
                }
                (CancellationAction::Upload(..), None) => Err(ApiError::validation("Seleccione un archivo")),
            };
            action.update(|m| m.finish_submit(&result));
            match result {
                Ok(()) => {
                    toasts.success(success_message(target));
                    load(client, state, toasts);
                }
                Err(e) => toasts.api_error(target.title(), &e),
            }
        });
    });

    let open_create = move |_| {
        draft.set(CancellationDraft::default());
        create.update(|m| m.open(()));
    };
    let close_create = Callback::new(move |()| create.update(ModalState::close));
    let add_selected_item = move |_| {
        let Some(item) = cascade.get_untracked().selected_item().map(|i| i.to_ref()) else {
            toasts.api_error("Solicitud de baja", &ApiError::validation("Seleccione un bien"));
            return;
        };
        let mut result = Ok(());
        draft.update(|d| result = d.add_item(item));
        if let Err(e) = result {
            toasts.api_error("Solicitud de baja", &e);
        }
    };
    let submit_create = Callback::new(move |()| {
        let payload = match draft.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                toasts.api_error("Solicitud de baja", &e);
                return;
            }
        };
        if !create.try_update(ModalState::begin_submit).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let result = api::create_cancellation(&client, &payload).await.map(|_| ());
            create.update(|m| m.finish_submit(&result));
            match result {
                Ok(()) => {
                    toasts.success("Solicitud de baja creada");
                    draft.set(CancellationDraft::default());
                    load(client, state, toasts);
                }
                Err(e) => toasts.api_error("No se pudo crear la solicitud", &e),
            }
        });
    });

    let can_decide = move || auth.get().can_decide_cancellations();
    let action_title = Signal::derive(move || action.get().target.map(|t| t.title().to_owned()).unwrap_or_default());

    view! {
        <div class="list-page cancellations-page">
            <header class="list-page__header">
                <h1>"Solicitudes de baja"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "+ Nueva solicitud"
                </button>
            </header>

            <StatCards stats=Signal::derive(move || state.get().stats())/>

            <div class="list-page__filters">
                <select on:change=move |ev| {
                    let status = CancellationStatus::from_code(&event_target_value(&ev));
                    state.update(|s| {
                        s.filter.status = status;
                        s.refresh(clock::today());
                    });
                }>
                    <option value="">"Todos los estados"</option>
                    {CancellationStatus::ALL
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
                    placeholder="Buscar por solicitante, motivo o bien"
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
                        <th>"#"</th>
                        <th>"Solicitante"</th>
                        <th>"Bienes"</th>
                        <th>"Motivo"</th>
                        <th>"Fecha"</th>
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
                            .map(|c| cancellation_row(c, can_decide(), open_action))
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Pager pagination=Signal::derive(move || state.get().list.pagination) on_page=on_page/>

            <Modal title=action_title open=Signal::derive(move || action.get().is_open()) on_close=close_action>
                {move || match action.get().target {
                    Some(CancellationAction::Upload(..)) => {
                        view! { <FilePicker label="Archivo" accept=DOCUMENT_ACCEPT node_ref=file_ref/> }.into_any()
                    }
                    Some(target) => {
                        let label = if matches!(target, CancellationAction::Refuse(_)) {
                            "Motivo del rechazo (obligatorio)"
                        } else {
                            "Comentario (opcional)"
                        };
                        view! {
                            <label class="dialog__label">
                                {label}
                                <textarea
                                    class="dialog__input"
                                    prop:value=move || comment.get()
                                    on:input=move |ev| comment.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                        }
                        .into_any()
                    }
                    None => ().into_any(),
                }}
                <ModalError error=Signal::derive(move || action.get().error)/>
                <ModalActions
                    submit_label="Confirmar"
                    submitting=Signal::derive(move || action.get().submitting)
                    on_cancel=close_action
                    on_submit=submit_action
                />
            </Modal>

            <Modal
                title="Nueva solicitud de baja".to_owned()
                open=Signal::derive(move || create.get().is_open())
                on_close=close_create
            >
                <CascadeSelector state=cascade/>
                <button class="btn" on:click=add_selected_item>
                    "Agregar bien"
                </button>
                <ul class="draft-items">
                    {move || {
                        draft
                            .get()
                            .items
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <li>
                                        {item.display()}
                                        <button class="btn btn--link" on:click=move |_| draft.update(|d| d.remove_item(id))>
                                            "Quitar"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <label class="dialog__label">
                    "Motivo"
                    <textarea
                        class="dialog__input"
                        prop:value=move || draft.get().reason
                        on:input=move |ev| {
                            let reason = event_target_value(&ev);
                            draft.update(|d| d.reason = reason);
                        }
                    ></textarea>
                </label>
                <ModalError error=Signal::derive(move || create.get().error)/>
                <ModalActions
                    submit_label="Enviar solicitud"
                    submitting=Signal::derive(move || create.get().submitting)
                    on_cancel=close_create
                    on_submit=submit_create
                />
            </Modal>
        </div>
    }
}

fn load(client: ApiClient, state: RwSignal<CancellationsState>, toasts: RwSignal<ToastState>) {
    if !state.try_update(|s| s.list.begin_load()).unwrap_or(false) {
        return;
    }
    leptos::task::spawn_local(async move {
        match api::fetch_cancellations(&client, 0, FETCH_ALL).await {
            Ok(page) => state.update(|s| {
                s.list.finish_load(page.content);
                s.refresh(clock::today());
            }),
            Err(e) => {
                state.update(|s| s.list.fail_load(e.to_string()));
                toasts.api_error("No se pudieron cargar las solicitudes de baja", &e);
            }
        }
        if state.try_update(|s| s.list.take_reload_request()).unwrap_or(false) {
            load(client, state, toasts);
        }
    });
}

fn success_message(action: CancellationAction) -> &'static str {
    match action {
        CancellationAction::Approve(_) => "Solicitud aprobada",
        CancellationAction::Refuse(_) => "Solicitud rechazada",
        CancellationAction::Upload(..) => "Documento cargado",
    }
}

fn cancellation_row(
    c: Cancellation,
    can_decide: bool,
    open_action: impl Fn(CancellationAction) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = c.id;
    let status = c.status();
    let pending = status == CancellationStatus::Pending;
    let items = c.items.iter().map(|i| i.display()).collect::<Vec<_>>().join(", ");
    let format_link = c.format_url.clone().map(|href| view! { <a href=href target="_blank">"Formato"</a> });
    let example_link = c.format_example_url.clone().map(|href| view! { <a href=href target="_blank">"Ejemplo"</a> });

    view! {
        <tr>
            <td>{id}</td>
            <td>{c.requester.full_name}</td>
            <td>{items}</td>
            <td>{c.reason}</td>
            <td>{format::date_time(c.requested_at)}</td>
            <td>
                <span class=format!("badge badge--{}", status.code().to_lowercase())>{status.label()}</span>
            </td>
            <td class="data-table__actions">
                <Show when=move || pending && can_decide>
                    <button class="btn btn--primary" on:click=move |_| open_action(CancellationAction::Approve(id))>
                        "Aprobar"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| open_action(CancellationAction::Refuse(id))>
                        "Rechazar"
                    </button>
                </Show>
                <button
                    class="btn"
                    on:click=move |_| open_action(CancellationAction::Upload(id, FormatDocument::Format))
                >
                    "Subir formato"
                </button>
                <button
                    class="btn"
                    on:click=move |_| open_action(CancellationAction::Upload(id, FormatDocument::Example))
                >
                    "Subir ejemplo"
                </button>
                {format_link}
                {example_link}
            </td>
        </tr>
    }
}
