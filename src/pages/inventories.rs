//! Inventories visible to the signed-in user, with role tabs and role
//! delegation (assign manager/signatory, quit a delegated role).

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::list_controls::ListStatus;
use crate::components::modal::{Modal, ModalActions, ModalError};
use crate::components::pager::Pager;
use crate::components::stat_cards::StatCards;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{Inventory, InventoryRole};
use crate::state::auth::AuthState;
use crate::state::inventories::{InventoriesState, InventoryAction};
use crate::state::modal::ModalState;
use crate::state::toast::{Notifier, ToastState};
use crate::util::clock;
use crate::util::search::SearchTerm;

#[component]
pub fn InventoriesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let state = RwSignal::new(InventoriesState::default());
    let modal = RwSignal::new(ModalState::<InventoryAction>::default());
    let email = RwSignal::new(String::new());

    // Role filters are scoped to the signed-in user once known.
    Effect::new(move || {
        let user_id = auth.get().user_id();
        if state.get_untracked().filter.user_id != user_id {
            state.update(|s| {
                s.filter.user_id = user_id;
                s.refresh(clock::today());
            });
        }
    });

    let reload = move || load(client.get_value(), state, toasts);
    reload();

    let select_tab = move |role: Option<InventoryRole>| {
        if state.get_untracked().filter.role == role {
            return;
        }
        state.update(|s| s.filter.role = role);
        reload();
    };

    let on_page = Callback::new(move |page: usize| {
        state.update(|s| {
            s.list.go_to_page(page);
        });
    });

    let open_modal = move |target: InventoryAction| {
        email.set(String::new());
        modal.update(|m| m.open(target));
    };
    let close_modal = Callback::new(move |()| modal.update(ModalState::close));

    let submit = Callback::new(move |()| {
        let Some(target) = modal.get_untracked().target else {
            return;
        };
        if !modal.try_update(ModalState::begin_submit).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        let address = email.get_untracked();
        leptos::task::spawn_local(async move {
            let result = match target {
                InventoryAction::Assign(id, role) => api::assign_inventory_role(&client, id, role, &address).await,
                InventoryAction::Quit(id, role) => api::quit_inventory_role(&client, id, role).await,
            };
            modal.update(|m| m.finish_submit(&result));
            match result {
                Ok(()) => {
                    toasts.success(&success_message(target));
                    load(client, state, toasts);
                }
                Err(e) => toasts.api_error(&modal_title(target), &e),
            }
        });
    });

    let tab_class = move |role: Option<InventoryRole>| {
        if state.get().filter.role == role { "tab tab--active" } else { "tab" }
    };
    let is_admin = move || auth.get().can_manage_users();

    view! {
        <div class="list-page inventories-page">
            <header class="list-page__header">
                <h1>"Inventarios"</h1>
            </header>

            <StatCards stats=Signal::derive(move || state.get().stats())/>

            <div class="tabs" role="tablist">
                <button class=move || tab_class(None) on:click=move |_| select_tab(None)>
                    "Todos"
                </button>
                {InventoryRole::ALL
                    .into_iter()
                    .map(|role| {
                        view! {
                            <button class=move || tab_class(Some(role)) on:click=move |_| select_tab(Some(role))>
                                {role_tab_label(role)}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="list-page__filters">
                <select on:change=move |ev| {
                    let status = match event_target_value(&ev).as_str() {
                        "active" => Some(true),
                        "inactive" => Some(false),
                        _ => None,
                    };
                    state.update(|s| {
                        s.filter.status = status;
                        s.refresh(clock::today());
                    });
                }>
                    <option value="">"Todos los estados"</option>
                    <option value="active">"Activos"</option>
                    <option value="inactive">"Inactivos"</option>
                </select>
                <input
                    type="search"
                    placeholder="Buscar por nombre, ubicación o propietario"
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

            <div class="card-grid">
                {move || {
                    let user_id = auth.get().user_id();
                    let admin = is_admin();
                    state
                        .get()
                        .list
                        .page_items()
                        .iter()
                        .cloned()
                        .map(|inv| inventory_card(inv, user_id, admin, open_modal))
                        .collect::<Vec<_>>()
                }}
            </div>

            <Pager pagination=Signal::derive(move || state.get().list.pagination) on_page=on_page/>

            <Modal
                title=Signal::derive(move || modal.get().target.map(modal_title).unwrap_or_default())
                open=Signal::derive(move || modal.get().is_open())
                on_close=close_modal
            >
                {move || match modal.get().target {
                    Some(InventoryAction::Assign(..)) => {
                        view! {
                            <label class="dialog__label">
                                "Correo del usuario"
                                <input
                                    class="dialog__input"
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                        }
                        .into_any()
                    }
                    Some(InventoryAction::Quit(_, role)) => {
                        view! {
                            <p class="dialog__danger">
                                {format!("Dejará de ser {} de este inventario.", role.label().to_lowercase())}
                            </p>
                        }
                        .into_any()
                    }
                    None => ().into_any(),
                }}
                <ModalError error=Signal::derive(move || modal.get().error)/>
                <ModalActions
                    submit_label="Confirmar"
                    submitting=Signal::derive(move || modal.get().submitting)
                    on_cancel=close_modal
                    on_submit=submit
                />
            </Modal>
        </div>
    }
}

/// The "all" tab loads every visible inventory; role tabs use the
/// role-scoped endpoint so a quit role disappears on reload.
fn load(client: ApiClient, state: RwSignal<InventoriesState>, toasts: RwSignal<ToastState>) {
    if !state.try_update(|s| s.list.begin_load()).unwrap_or(false) {
        return;
    }
    let role = state.get_untracked().filter.role;
    leptos::task::spawn_local(async move {
        let result = match role {
            None => api::fetch_my_inventories(&client).await,
            Some(role) => api::fetch_role_inventories(&client, role).await,
        };
        match result {
            Ok(items) => state.update(|s| {
                s.list.finish_load(items);
                s.refresh(clock::today());
            }),
            Err(e) => {
                state.update(|s| s.list.fail_load(e.to_string()));
                toasts.api_error("No se pudieron cargar los inventarios", &e);
            }
        }
        if state.try_update(|s| s.list.take_reload_request()).unwrap_or(false) {
            load(client, state, toasts);
        }
    });
}

fn role_tab_label(role: InventoryRole) -> &'static str {
    match role {
        InventoryRole::Owner => "Propios",
        InventoryRole::Manager => "Como manejador",
        InventoryRole::Signatory => "Como firmante",
    }
}

fn modal_title(action: InventoryAction) -> String {
    match action {
        InventoryAction::Assign(_, role) => format!("Asignar {}", role.label().to_lowercase()),
        InventoryAction::Quit(_, role) => format!("Renunciar como {}", role.label().to_lowercase()),
    }
}

fn success_message(action: InventoryAction) -> String {
    match action {
        InventoryAction::Assign(_, role) => format!("{} asignado", role.label()),
        InventoryAction::Quit(_, role) => format!("Ya no es {} del inventario", role.label().to_lowercase()),
    }
}

fn inventory_card(
    inv: Inventory,
    user_id: Option<i64>,
    admin: bool,
    open_modal: impl Fn(InventoryAction) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = inv.id;
    let roles = user_id.map(|uid| inv.roles_of(uid)).unwrap_or_default();
    let can_assign = admin || roles.contains(&InventoryRole::Owner);
    let quittable = user_id.map(|uid| InventoriesState::quittable_roles(&inv, uid)).unwrap_or_default();
    let role_badges = roles
        .iter()
        .map(|r| view! { <span class="badge">{r.label()}</span> })
        .collect::<Vec<_>>();
    let quit_buttons = quittable
        .into_iter()
        .map(|role| {
            view! {
                <button class="btn btn--danger" on:click=move |_| open_modal(InventoryAction::Quit(id, role))>
                    {format!("Renunciar como {}", role.label().to_lowercase())}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class=if inv.status { "inventory-card" } else { "inventory-card inventory-card--inactive" }>
            <h3>{inv.name.clone()}</h3>
            <p class="inventory-card__meta">{inv.location.clone().unwrap_or_default()}</p>
            <p class="inventory-card__meta">"Propietario: " {inv.owner_name().to_owned()}</p>
            <p class="inventory-card__meta">
                {format!("{} manejadores · {} firmantes", inv.managers.len(), inv.signatories.len())}
            </p>
            <div class="inventory-card__roles">{role_badges}</div>
            <div class="inventory-card__actions">
                <Show when=move || can_assign>
                    <button class="btn" on:click=move |_| open_modal(InventoryAction::Assign(id, InventoryRole::Manager))>
                        "Asignar manejador"
                    </button>
                    <button class="btn" on:click=move |_| open_modal(InventoryAction::Assign(id, InventoryRole::Signatory))>
                        "Asignar firmante"
                    </button>
                </Show>
                {quit_buttons}
            </div>
        </article>
    }
}
