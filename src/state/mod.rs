//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`cancellations`, `loans`, `users`, ...) on top of
//! a few shared models (`list`, `modal`, `selector`, `toast`). Every model
//! is plain data with methods, so filtering, pagination and modal rules are
//! tested natively; pages wrap them in `RwSignal`s.

pub mod auth;
pub mod cancellations;
pub mod inventories;
pub mod list;
pub mod loans;
pub mod modal;
pub mod reports;
pub mod selector;
pub mod toast;
pub mod users;
pub mod verifications;
