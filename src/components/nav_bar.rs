//! Top navigation with page links, signed-in user and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppConfig;
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = StoredValue::new(expect_context::<AppConfig>());

    let user_label = move || {
        auth.get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| format!("{} ({})", u.full_name, u.role.label()))
    };

    let on_logout = move |_| {
        let config = config.get_value();
        crate::util::storage::clear_token(&config.token_key);
        auth.update(|a| a.user = None);
        #[cfg(feature = "csr")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(&config.login_url);
            }
        }
    };

    view! {
        <header class="toolbar nav-bar">
            <span class="toolbar__board-name">"SGDIS"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="nav-bar__links">
                <A href="/inventarios">"Inventarios"</A>
                <A href="/prestamos">"Préstamos"</A>
                <A href="/verificaciones">"Verificaciones"</A>
                <A href="/bajas">"Bajas"</A>
                <A href="/reportes">"Reportes"</A>
                <Show when=move || auth.get().can_manage_users()>
                    <A href="/usuarios">"Usuarios"</A>
                </Show>
            </nav>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{user_label}</span>
            <button class="btn toolbar__logout" on:click=on_logout title="Cerrar sesión">
                "Salir"
            </button>
        </header>
    }
}
