//! Prev/next pager with a truncated page-number list.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::pagination::{PageLink, Pagination};

#[component]
pub fn Pager(#[prop(into)] pagination: Signal<Pagination>, on_page: Callback<usize>) -> impl IntoView {
    view! {
        <Show when=move || { pagination.get().total_pages() > 1 }>
            <nav class="pager" aria-label="Paginación">
                <span class="pager__summary">{move || pagination.get().summary()}</span>
                <button
                    class="btn pager__prev"
                    disabled=move || !pagination.get().has_prev()
                    on:click=move |_| {
                        let p = pagination.get_untracked();
                        if p.has_prev() {
                            on_page.run(p.page - 1);
                        }
                    }
                >
                    "Anterior"
                </button>
                {move || {
                    let p = pagination.get();
                    p.links()
                        .into_iter()
                        .map(|link| match link {
                            PageLink::Page(index) => {
                                let class = if index == p.page { "btn pager__page pager__page--active" } else { "btn pager__page" };
                                view! {
                                    <button class=class on:click=move |_| on_page.run(index)>
                                        {index + 1}
                                    </button>
                                }
                                .into_any()
                            }
                            PageLink::Gap => view! { <span class="pager__gap">"…"</span> }.into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="btn pager__next"
                    disabled=move || !pagination.get().has_next()
                    on:click=move |_| {
                        let p = pagination.get_untracked();
                        if p.has_next() {
                            on_page.run(p.page + 1);
                        }
                    }
                >
                    "Siguiente"
                </button>
            </nav>
        </Show>
    }
}
