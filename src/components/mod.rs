//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared page chrome (navigation, toasts, modal
//! shell, pager, statistic cards) and the dropdown/cascade inputs used by
//! several pages, reading shared state from Leptos context providers.

pub mod cascade_selector;
pub mod file_picker;
pub mod list_controls;
pub mod modal;
pub mod nav_bar;
pub mod pager;
pub mod select_field;
pub mod stat_cards;
pub mod toast_host;
