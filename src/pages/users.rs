//! User administration: list, create/edit, toggle status, delete.

use leptos::prelude::*;

use super::FETCH_ALL;
use crate::components::list_controls::ListStatus;
use crate::components::modal::{Modal, ModalActions, ModalError};
use crate::components::pager::Pager;
use crate::components::stat_cards::StatCards;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;
use crate::state::modal::ModalState;
use crate::state::toast::{Notifier, ToastState};
use crate::state::users::{UserForm, UsersState};
use crate::util::clock;
use crate::util::search::SearchTerm;

/// Row-level actions that go through a confirmation modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UserAction {
    ToggleStatus(i64, bool),
    Delete(i64),
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let state = RwSignal::new(UsersState::default());
    let editor = RwSignal::new(ModalState::<()>::default());
    let form = RwSignal::new(UserForm::default());
    let confirm = RwSignal::new(ModalState::<UserAction>::default());

    let reload = move || load(client.get_value(), state, toasts);
    reload();

    let on_page = Callback::new(move |page: usize| {
        state.update(|s| {
            s.list.go_to_page(page);
        });
    });

    let open_editor = move |user: Option<User>| {
        form.set(user.as_ref().map(UserForm::from_user).unwrap_or_default());
        editor.update(|m| m.open(()));
    };
    let close_editor = Callback::new(move |()| editor.update(ModalState::close));
    let submit_editor = Callback::new(move |()| {
        let current = form.get_untracked();
        let payload = match current.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                toasts.api_error("Usuario", &e);
                return;
            }
        };
        if !editor.try_update(ModalState::begin_submit).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let result = match current.id {
                Some(id) => api::update_user(&client, id, &payload).await,
                None => api::create_user(&client, &payload).await,
            }
            .map(|_| ());
            editor.update(|m| m.finish_submit(&result));
            match result {
                Ok(()) => {
                    toasts.success(if current.id.is_some() { "Usuario actualizado" } else { "Usuario creado" });
                    load(client, state, toasts);
                }
                Err(e) => toasts.api_error("No se pudo guardar el usuario", &e),
            }
        });
    });

    let open_confirm = move |action: UserAction| confirm.update(|m| m.open(action));
    let close_confirm = Callback::new(move |()| confirm.update(ModalState::close));
    let submit_confirm = Callback::new(move |()| {
        let Some(action) = confirm.get_untracked().target else {
            return;
        };
        if !confirm.try_update(ModalState::begin_submit).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let result = match action {
                UserAction::ToggleStatus(id, _) => api::toggle_user_status(&client, id).await,
                UserAction::Delete(id) => api::delete_user(&client, id).await,
            };
            confirm.update(|m| m.finish_submit(&result));
            match result {
                Ok(()) => {
                    toasts.success(match action {
                        UserAction::ToggleStatus(_, true) => "Usuario desactivado",
                        UserAction::ToggleStatus(_, false) => "Usuario activado",
                        UserAction::Delete(_) => "Usuario eliminado",
                    });
                    load(client, state, toasts);
                }
                Err(e) => toasts.api_error("No se pudo completar la acción", &e),
            }
        });
    });

    view! {
        <Show
            when=move || auth.get().can_manage_users()
            fallback=|| view! { <p class="list-page__error">"No tiene permisos para administrar usuarios."</p> }
        >
            <div class="list-page users-page">
                <header class="list-page__header">
                    <h1>"Usuarios"</h1>
                    <button class="btn btn--primary" on:click=move |_| open_editor(None)>
                        "+ Nuevo usuario"
                    </button>
                </header>

                <StatCards stats=Signal::derive(move || state.get().stats())/>

                <div class="list-page__filters">
                    <RoleSelect
                        placeholder="Todos los roles"
                        selected=Signal::derive(move || state.get().filter.role)
                        on_change=Callback::new(move |role: Option<Role>| {
                            state.update(|s| {
                                s.filter.role = role;
                                s.refresh(clock::today());
                            });
                        })
                    />
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
                        placeholder="Buscar por nombre, correo o cargo"
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
                            <th>"Nombre"</th>
                            <th>"Correo"</th>
                            <th>"Cargo"</th>
                            <th>"Rol"</th>
                            <th>"Centro"</th>
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
                                .map(|user| user_row(user, open_editor, open_confirm))
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>

                <Pager pagination=Signal::derive(move || state.get().list.pagination) on_page=on_page/>

                <Modal
                    title=Signal::derive(move || {
                        if form.get().id.is_some() { "Editar usuario".to_owned() } else { "Nuevo usuario".to_owned() }
                    })
                    open=Signal::derive(move || editor.get().is_open())
                    on_close=close_editor
                >
                    <label class="dialog__label">
                        "Nombre completo"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().full_name
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.full_name = value);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Correo electrónico"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.email = value);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Cargo"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().job_title
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.job_title = value);
                            }
                        />
                    </label>
                    <RoleSelect
                        placeholder="Seleccione un rol"
                        selected=Signal::derive(move || form.get().role)
                        on_change=Callback::new(move |role: Option<Role>| form.update(|f| f.role = role))
                    />
                    <label class="dialog__label dialog__label--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().status
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.status = checked);
                            }
                        />
                        "Activo"
                    </label>
                    <ModalError error=Signal::derive(move || editor.get().error)/>
                    <ModalActions
                        submit_label="Guardar"
                        submitting=Signal::derive(move || editor.get().submitting)
                        on_cancel=close_editor
                        on_submit=submit_editor
                    />
                </Modal>

                <Modal
                    title="Confirmar acción".to_owned()
                    open=Signal::derive(move || confirm.get().is_open())
                    on_close=close_confirm
                >
                    <p class="dialog__danger">
                        {move || match confirm.get().target {
                            Some(UserAction::ToggleStatus(_, true)) => "El usuario no podrá iniciar sesión.",
                            Some(UserAction::ToggleStatus(_, false)) => "El usuario podrá iniciar sesión de nuevo.",
                            Some(UserAction::Delete(_)) => "El usuario se eliminará de forma permanente.",
                            None => "",
                        }}
                    </p>
                    <ModalError error=Signal::derive(move || confirm.get().error)/>
                    <ModalActions
                        submit_label="Confirmar"
                        submitting=Signal::derive(move || confirm.get().submitting)
                        on_cancel=close_confirm
                        on_submit=submit_confirm
                        danger=true
                    />
                </Modal>
            </div>
        </Show>
    }
}

fn load(client: ApiClient, state: RwSignal<UsersState>, toasts: RwSignal<ToastState>) {
    if !state.try_update(|s| s.list.begin_load()).unwrap_or(false) {
        return;
    }
    leptos::task::spawn_local(async move {
        match api::fetch_users(&client, 0, FETCH_ALL).await {
            Ok(page) => state.update(|s| {
                s.list.finish_load(page.content);
                s.refresh(clock::today());
            }),
            Err(e) => {
                state.update(|s| s.list.fail_load(e.to_string()));
                toasts.api_error("No se pudieron cargar los usuarios", &e);
            }
        }
        if state.try_update(|s| s.list.take_reload_request()).unwrap_or(false) {
            load(client, state, toasts);
        }
    });
}

#[component]
fn RoleSelect(
    placeholder: &'static str,
    #[prop(into)] selected: Signal<Option<Role>>,
    on_change: Callback<Option<Role>>,
) -> impl IntoView {
    view! {
        <select on:change=move |ev| on_change.run(Role::from_code(&event_target_value(&ev)))>
            <option value="" selected=move || selected.get().is_none()>
                {placeholder}
            </option>
            {Role::ASSIGNABLE
                .into_iter()
                .map(|role| {
                    view! {
                        <option value=role.code() selected=move || selected.get() == Some(role)>
                            {role.label()}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}

fn user_row(
    user: User,
    open_editor: impl Fn(Option<User>) + Copy + Send + Sync + 'static,
    open_confirm: impl Fn(UserAction) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = user.id;
    let active = user.status;
    let editable = user.clone();
    view! {
        <tr>
            <td>{user.full_name}</td>
            <td>{user.email}</td>
            <td>{user.job_title.unwrap_or_default()}</td>
            <td>{user.role.label()}</td>
            <td>{user.institution_name.unwrap_or_default()}</td>
            <td>
                <span class=if active { "badge badge--active" } else { "badge badge--inactive" }>
                    {if active { "Activo" } else { "Inactivo" }}
                </span>
            </td>
            <td class="data-table__actions">
                <button class="btn" on:click=move |_| open_editor(Some(editable.clone()))>
                    "Editar"
                </button>
                <button class="btn" on:click=move |_| open_confirm(UserAction::ToggleStatus(id, active))>
                    {if active { "Desactivar" } else { "Activar" }}
                </button>
                <button class="btn btn--danger" on:click=move |_| open_confirm(UserAction::Delete(id))>
                    "Eliminar"
                </button>
            </td>
        </tr>
    }
}
