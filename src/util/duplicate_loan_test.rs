use super::*;
use crate::net::types::{ItemRef, UserRef};
use chrono::{NaiveDate, NaiveDateTime};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(h, m, s).unwrap()
}

fn loan(id: i64, lend_at: NaiveDateTime) -> Loan {
    Loan {
        id,
        item: ItemRef { id: 4, product_name: "Portátil".to_owned(), licence_plate_number: Some("SENA-4".to_owned()) },
        responsible: UserRef { id: 2, full_name: "Luis".to_owned(), email: None },
        lender: None,
        lend_at,
        return_at: None,
        returned: false,
        details_lend: Some("Aula 3".to_owned()),
        details_return: None,
    }
}

const WINDOW: Duration = Duration::from_secs(5);

#[test]
fn identical_loans_within_window_flag_older() {
    let loans = vec![loan(11, at(9, 0, 4)), loan(10, at(9, 0, 0))];
    assert_eq!(find_duplicate(&loans, WINDOW), Some(10));
}

#[test]
fn exactly_five_seconds_still_counts() {
    let loans = vec![loan(10, at(9, 0, 0)), loan(11, at(9, 0, 5))];
    assert_eq!(find_duplicate(&loans, WINDOW), Some(10));
}

#[test]
fn six_seconds_apart_is_not_duplicate() {
    let loans = vec![loan(10, at(9, 0, 0)), loan(11, at(9, 0, 6))];
    assert_eq!(find_duplicate(&loans, WINDOW), None);
}

#[test]
fn only_two_most_recent_are_compared() {
    let loans = vec![loan(1, at(8, 0, 0)), loan(2, at(8, 0, 1)), loan(3, at(12, 0, 0))];
    assert_eq!(find_duplicate(&loans, WINDOW), None);
}

#[test]
fn different_responsible_is_not_duplicate() {
    let mut second = loan(11, at(9, 0, 1));
    second.responsible.id = 3;
    let loans = vec![loan(10, at(9, 0, 0)), second];
    assert_eq!(find_duplicate(&loans, WINDOW), None);
}

#[test]
fn different_details_or_returned_flag_is_not_duplicate() {
    let mut other_details = loan(11, at(9, 0, 1));
    other_details.details_lend = Some("Aula 5".to_owned());
    assert_eq!(find_duplicate(&[loan(10, at(9, 0, 0)), other_details], WINDOW), None);

    let mut returned = loan(11, at(9, 0, 1));
    returned.returned = true;
    assert_eq!(find_duplicate(&[loan(10, at(9, 0, 0)), returned], WINDOW), None);
}

#[test]
fn details_compare_after_trimming() {
    let mut padded = loan(11, at(9, 0, 1));
    padded.details_lend = Some("  Aula 3 ".to_owned());
    assert_eq!(find_duplicate(&[loan(10, at(9, 0, 0)), padded], WINDOW), Some(10));
}

#[test]
fn single_or_empty_list_has_no_duplicate() {
    assert_eq!(find_duplicate(&[], WINDOW), None);
    assert_eq!(find_duplicate(&[loan(1, at(9, 0, 0))], WINDOW), None);
}

#[test]
fn equal_timestamps_keep_higher_id() {
    let loans = vec![loan(21, at(9, 0, 0)), loan(20, at(9, 0, 0))];
    assert_eq!(find_duplicate(&loans, WINDOW), Some(20));
}
