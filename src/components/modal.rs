//! Modal shell: backdrop, title bar, Escape/backdrop close and a short
//! closing animation before the parent is told to hide it.

use leptos::prelude::*;

/// Length of the `modal--closing` CSS animation.
#[cfg(feature = "csr")]
const CLOSE_ANIMATION_MS: u32 = 200;

#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let closing = RwSignal::new(false);

    let request_close = Callback::new(move |()| {
        if closing.get_untracked() {
            return;
        }
        closing.set(true);
        #[cfg(feature = "csr")]
        {
            gloo_timers::callback::Timeout::new(CLOSE_ANIMATION_MS, move || {
                closing.set(false);
                on_close.run(());
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            closing.set(false);
            on_close.run(());
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            request_close.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div
                class=move || if closing.get() { "dialog-backdrop modal--closing" } else { "dialog-backdrop" }
                on:click=move |_| request_close.run(())
            >
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <header class="dialog__header">
                        <h2>{move || title.get()}</h2>
                        <button class="dialog__close" title="Cerrar" on:click=move |_| request_close.run(())>
                            "×"
                        </button>
                    </header>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

/// Cancel + submit button row shared by form modals.
#[component]
pub fn ModalActions(
    #[prop(into)] submit_label: String,
    #[prop(into)] submitting: Signal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
    #[prop(optional)] danger: bool,
) -> impl IntoView {
    let submit_class = if danger { "btn btn--danger" } else { "btn btn--primary" };
    view! {
        <div class="dialog__actions">
            <button class="btn" on:click=move |_| on_cancel.run(())>
                "Cancelar"
            </button>
            <button
                class=submit_class
                disabled=move || submitting.get()
                on:click=move |_| on_submit.run(())
            >
                {move || if submitting.get() { "Procesando...".to_owned() } else { submit_label.clone() }}
            </button>
        </div>
    }
}

/// Inline error line under a modal form.
#[component]
pub fn ModalError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}
