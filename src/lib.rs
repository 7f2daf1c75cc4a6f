//! # sgdis-ui
//!
//! Leptos + WASM browser client for SGDIS, the SENA inventory and asset
//! tracker. Pages cover inventories, loans, verifications, cancellations
//! (bajas), users and reports with Excel/PDF export.
//!
//! Everything except the browser glue (`net::http` transport, storage,
//! downloads) compiles natively so the state and export logic is tested
//! with plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
