//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, toast_host::ToastHost};
use crate::config::AppConfig;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::pages::{
    cancellations::CancellationsPage, inventories::InventoriesPage, loans::LoansPage, reports::ReportsPage,
    users::UsersPage, verifications::VerificationsPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// Root application component.
///
/// Provides config, the API client and shared state, resolves the current
/// user once, and routes between pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let client = ApiClient::new(config.clone());
    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(client.clone());
    provide_context(auth);
    provide_context(toasts);

    leptos::task::spawn_local(async move {
        let result = api::fetch_current_user(&client).await;
        if let Err(e) = &result {
            leptos::logging::warn!("current user lookup failed: {e}");
        }
        auth.set(AuthState { user: result.ok(), loading: false });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sgdis-ui.css"/>
        <Title text="SGDIS"/>

        <AuthGate>
            <Router>
                <NavBar/>
                <main class="app-main">
                    <Routes fallback=|| "Página no encontrada.".into_view()>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path="/inventarios"/> }/>
                        <Route path=StaticSegment("inventarios") view=InventoriesPage/>
                        <Route path=StaticSegment("prestamos") view=LoansPage/>
                        <Route path=StaticSegment("verificaciones") view=VerificationsPage/>
                        <Route path=StaticSegment("bajas") view=CancellationsPage/>
                        <Route path=StaticSegment("reportes") view=ReportsPage/>
                        <Route path=StaticSegment("usuarios") view=UsersPage/>
                    </Routes>
                </main>
            </Router>
        </AuthGate>
        <ToastHost/>
    }
}

/// Render `children` only for a signed-in user; otherwise show a loading or
/// redirecting placeholder and send the browser to the login page.
#[component]
fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = StoredValue::new(expect_context::<AppConfig>());

    Effect::new(move || {
        if auth.get().should_redirect() {
            let login_url = config.get_value().login_url;
            #[cfg(feature = "csr")]
            {
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href(&login_url);
                }
            }
            #[cfg(not(feature = "csr"))]
            let _ = login_url;
        }
    });

    view! {
        <Show
            when=move || auth.get().user.is_some()
            fallback=move || {
                let text = if auth.get().loading { "Cargando..." } else { "Redirigiendo al inicio de sesión..." };
                view! { <p class="app-placeholder">{text}</p> }
            }
        >
            {children()}
        </Show>
    }
}
