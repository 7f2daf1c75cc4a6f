//! Local wall clock for date-range filters and report headers.
//!
//! `chrono`'s `wasmbind` feature backs `Local::now()` with the browser's
//! `Date`, so the same call works in tests and in the bundle.

use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    now().date()
}
