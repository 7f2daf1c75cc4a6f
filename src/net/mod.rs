//! Networking modules for the SGDIS REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns authentication and status handling, `api` maps each backend
//! route to a typed helper, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
