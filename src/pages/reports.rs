//! Report generator: pick a kind and scope, preview, export.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ReportsState` decides what to fetch and derives the preview table; this
//! page only issues the request and hands the table to the Excel or PDF
//! renderer, then downloads the bytes.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::FETCH_ALL;
use crate::components::cascade_selector::CascadeSelector;
use crate::components::list_controls::DateRangeSelect;
use crate::components::stat_cards::StatCards;
use crate::error::ApiError;
use crate::export::{self, ExportError, ReportTable};
use crate::net::api;
use crate::net::http::ApiClient;
use crate::state::reports::{ReportData, ReportKind, ReportSource, ReportsState};
use crate::state::selector::{CascadeLevel, CascadeState};
use crate::state::toast::{Notifier, ToastState};
use crate::util::date_range::DateRange;
use crate::util::{clock, download};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportFormat {
    Excel,
    Pdf,
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let state = RwSignal::new(ReportsState::default());
    let cascade = RwSignal::new(CascadeState::default());
    let kind = Memo::new(move |_| state.get().kind);

    let generate = move |_| {
        let source = match state.get_untracked().source(&cascade.get_untracked()) {
            Ok(source) => source,
            Err(e) => {
                toasts.api_error("Reporte", &e);
                return;
            }
        };
        if !state.try_update(ReportsState::begin_load).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match fetch(&client, source).await {
                Ok(data) => {
                    let rows = data.len();
                    state.update(|s| s.finish_load(data, clock::today(), clock::now()));
                    leptos::logging::log!("report loaded: {rows} rows");
                }
                Err(e) => {
                    state.update(|s| s.fail_load(e.to_string()));
                    toasts.api_error("No se pudo generar el reporte", &e);
                }
            }
        });
    };

    let export = move |format: ExportFormat| {
        let Some(table) = state.with_untracked(|s| s.exportable().cloned()) else {
            toasts.error("No hay datos para exportar");
            return;
        };
        match export_bytes(&table, format) {
            Ok(()) => toasts.success("Reporte exportado"),
            Err(message) => toasts.error(&format!("No se pudo exportar el reporte: {message}")),
        }
    };

    view! {
        <div class="list-page reports-page">
            <header class="list-page__header">
                <h1>"Reportes"</h1>
            </header>

            <div class="list-page__filters">
                <select on:change=move |ev| {
                    let kind = ReportKind::from_code(&event_target_value(&ev));
                    state.update(|s| s.set_kind(kind));
                }>
                    {ReportKind::ALL
                        .into_iter()
                        .map(|k| view! { <option value=k.code()>{k.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <Show when=move || kind.get().is_dated()>
                    <DateRangeSelect on_change=Callback::new(move |range: DateRange| {
                        state.update(|s| s.date_range = range);
                    })/>
                </Show>
            </div>

            {move || match scope_depth(kind.get()) {
                Some(depth) => view! { <CascadeSelector state=cascade depth=depth/> }.into_any(),
                None => ().into_any(),
            }}

            <div class="reports-page__actions">
                <button class="btn btn--primary" disabled=move || state.get().loading on:click=generate>
                    {move || if state.get().loading { "Generando..." } else { "Generar" }}
                </button>
                <button
                    class="btn"
                    disabled=move || state.get().exportable().is_none()
                    on:click=move |_| export(ExportFormat::Excel)
                >
                    "Exportar Excel"
                </button>
                <button
                    class="btn"
                    disabled=move || state.get().exportable().is_none()
                    on:click=move |_| export(ExportFormat::Pdf)
                >
                    "Exportar PDF"
                </button>
            </div>

            {move || state.get().error.map(|e| view! { <p class="list-page__error">{e}</p> })}

            <StatCards stats=Signal::derive(move || state.get().stats)/>

            {move || state.get().table.map(preview)}
        </div>
    }
}

/// Cascade depth a report kind needs; `None` hides the selector.
fn scope_depth(kind: ReportKind) -> Option<CascadeLevel> {
    match kind {
        ReportKind::Items | ReportKind::Verifications => Some(CascadeLevel::Inventory),
        ReportKind::Loans => Some(CascadeLevel::Item),
        ReportKind::Inventories => Some(CascadeLevel::Institution),
        ReportKind::Users => None,
    }
}

async fn fetch(client: &ApiClient, source: ReportSource) -> Result<ReportData, ApiError> {
    Ok(match source {
        ReportSource::Items(inventory_id) => {
            ReportData::Items(api::fetch_inventory_items(client, inventory_id, 0, FETCH_ALL).await?.content)
        }
        ReportSource::Users => ReportData::Users(api::fetch_users(client, 0, FETCH_ALL).await?.content),
        ReportSource::Loans(query) => ReportData::Loans(api::filter_loans(client, &query).await?),
        ReportSource::Verifications(regional_id) => {
            ReportData::Verifications(api::fetch_regional_verifications(client, regional_id).await?)
        }
        ReportSource::InventoryVerifications(inventory_id) => {
            ReportData::Verifications(api::fetch_inventory_verifications(client, inventory_id).await?)
        }
        ReportSource::Inventories(institution_id) => {
            ReportData::Inventories(api::fetch_institution_inventories(client, institution_id).await?)
        }
    })
}

fn export_bytes(table: &ReportTable, format: ExportFormat) -> Result<(), String> {
    let (bytes, extension, mime) = match format {
        ExportFormat::Excel => (export::excel::render(table), "xlsx", download::XLSX_MIME),
        ExportFormat::Pdf => (export::pdf::render(table), "pdf", download::PDF_MIME),
    };
    let bytes = bytes.map_err(|e: ExportError| e.to_string())?;
    download::save_bytes(&format!("{}.{extension}", table.file_stem()), mime, &bytes)
}

fn preview(table: ReportTable) -> impl IntoView {
    let rows = table.text_rows();
    let empty = rows.is_empty();
    view! {
        <section class="report-preview">
            <h2>{table.title.clone()}</h2>
            <p class="report-preview__meta">
                {format!("Generado el {} - {} registros", table.generated_at.format("%d/%m/%Y %H:%M"), rows.len())}
            </p>
            <Show when=move || empty>
                <p class="list-page__empty">"No hay registros para los filtros seleccionados."</p>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>{table.columns.iter().map(|c| view! { <th>{c.title}</th> }).collect::<Vec<_>>()}</tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! { <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}</tr> }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}
