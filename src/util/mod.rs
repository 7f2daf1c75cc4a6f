//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (`storage`, `download`, `clock`)
//! and pure list logic (`search`, `date_range`, `pagination`,
//! `duplicate_loan`) from page code so the latter stays testable natively.

pub mod clock;
pub mod date_range;
pub mod download;
pub mod duplicate_loan;
pub mod format;
pub mod pagination;
pub mod search;
pub mod storage;
