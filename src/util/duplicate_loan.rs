//! Detection of double-submitted loans.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend has accepted the same lend twice when the submit button was
//! clicked rapidly. After each lend the client re-reads the item's loans and
//! asks this module whether the newest two are the same request. The check
//! is best effort: a concurrent lend from another tab can still race it.

#[cfg(test)]
#[path = "duplicate_loan_test.rs"]
mod duplicate_loan_test;

use std::time::Duration;

use crate::net::types::Loan;

/// Id of the older loan when the two most recent loans are duplicates.
///
/// Duplicates share item, responsible user, lend details and returned flag,
/// and their lend timestamps are at most `window` apart (inclusive).
pub fn find_duplicate(loans: &[Loan], window: Duration) -> Option<i64> {
    let mut ordered: Vec<&Loan> = loans.iter().collect();
    ordered.sort_by_key(|l| (l.lend_at, l.id));
    let [.., older, newest] = ordered.as_slice() else {
        return None;
    };
    if !same_request(older, newest) {
        return None;
    }
    let gap = newest.lend_at.signed_duration_since(older.lend_at).to_std().ok()?;
    (gap <= window).then_some(older.id)
}

fn same_request(a: &Loan, b: &Loan) -> bool {
    a.item.id == b.item.id
        && a.responsible.id == b.responsible.id
        && a.returned == b.returned
        && normalized(a.details_lend.as_deref()) == normalized(b.details_lend.as_deref())
}

fn normalized(details: Option<&str>) -> &str {
    details.map_or("", str::trim)
}
