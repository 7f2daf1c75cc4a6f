//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signal and modal controllers, runs its loaders
//! and action handlers, and delegates shared chrome to `components`.

pub mod cancellations;
pub mod inventories;
pub mod loans;
pub mod reports;
pub mod users;
pub mod verifications;

/// Rows requested per list load; filtering and paging happen client-side.
pub(crate) const FETCH_ALL: usize = 1000;
