use super::*;
use crate::net::types::{ItemRef, UserRef};
use chrono::NaiveDateTime;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn days_ago(n: u64) -> NaiveDateTime {
    (today() - chrono::Days::new(n)).and_hms_opt(10, 30, 0).unwrap()
}

fn verification(id: i64, inventory: (i64, &str), status: VerificationStatus, created_at: NaiveDateTime) -> Verification {
    Verification {
        id,
        item: ItemRef {
            id: id + 50,
            product_name: format!("Portátil {id}"),
            licence_plate_number: Some(format!("SENA-{id:04}")),
        },
        inventory_id: inventory.0,
        inventory_name: Some(inventory.1.to_owned()),
        status,
        photo_url: None,
        user: Some(UserRef { id: 7, full_name: "Marta Ríos".to_owned(), email: None }),
        created_at,
    }
}

fn loaded() -> VerificationsState {
    let mut state = VerificationsState::default();
    assert!(state.select_regional(Some(1)));
    assert_eq!(state.begin_load(), Some(1));
    let rows = vec![
        verification(1, (20, "Sistemas"), VerificationStatus::Verified, days_ago(0)),
        verification(2, (21, "Biblioteca"), VerificationStatus::Pending, days_ago(2)),
        verification(3, (20, "Sistemas"), VerificationStatus::Missing, days_ago(90)),
    ];
    assert!(!state.finish_load(1, Ok(rows), today()));
    state
}

fn ids(state: &VerificationsState) -> Vec<i64> {
    state.list.filtered.iter().map(|v| v.id).collect()
}

// =============================================================================
// FILTERS
// =============================================================================

#[test]
fn inventory_and_status_filters() {
    let mut state = loaded();
    state.filter.inventory_id = Some(20);
    state.refresh(today());
    assert_eq!(ids(&state), vec![1, 3]);
    state.filter.status = Some(VerificationStatus::Missing);
    state.refresh(today());
    assert_eq!(ids(&state), vec![3]);
}

#[test]
fn date_range_and_plate_search() {
    let mut state = loaded();
    state.filter.date_range = DateRange::Month;
    state.refresh(today());
    assert_eq!(ids(&state), vec![1, 2]);
    state.filter.search = SearchTerm::new("sena-0002");
    state.refresh(today());
    assert_eq!(ids(&state), vec![2]);
}

#[test]
fn inventory_options_are_distinct_and_sorted() {
    assert_eq!(
        loaded().inventory_options(),
        vec![(21, "Biblioteca".to_owned()), (20, "Sistemas".to_owned())]
    );
}

#[test]
fn stats_by_status() {
    let values: Vec<usize> = loaded().stats().iter().map(|s| s.value).collect();
    assert_eq!(values, vec![3, 1, 1, 1]);
}

// =============================================================================
// REGIONAL SELECTION
// =============================================================================

#[test]
fn reselecting_same_regional_does_not_reload() {
    let mut state = loaded();
    assert!(!state.select_regional(Some(1)));
    state.filter.inventory_id = Some(20);
    assert!(state.select_regional(Some(2)));
    assert_eq!(state.filter.inventory_id, None);
}

#[test]
fn clearing_regional_empties_rows() {
    let mut state = loaded();
    assert!(!state.select_regional(None));
    assert!(state.list.items.is_empty());
    assert!(state.list.page_items().is_empty());
    assert_eq!(state.list.pagination.total, 0);
    assert_eq!(state.stats()[0].value, 0);
}

#[test]
fn clearing_regional_mid_load_drops_late_rows() {
    let mut state = VerificationsState::default();
    state.select_regional(Some(1));
    assert_eq!(state.begin_load(), Some(1));
    state.select_regional(None);
    assert!(state.list.loading);
    let late = vec![verification(9, (20, "Sistemas"), VerificationStatus::Pending, days_ago(0))];
    assert!(!state.finish_load(1, Ok(late), today()));
    assert!(!state.list.loading);
    assert!(state.list.page_items().is_empty());
}

#[test]
fn switching_regional_mid_load_reloads_new_regional() {
    let mut state = VerificationsState::default();
    state.select_regional(Some(1));
    assert_eq!(state.begin_load(), Some(1));

    assert!(state.select_regional(Some(2)));
    assert_eq!(state.begin_load(), None);

    let stale = vec![verification(1, (20, "Sistemas"), VerificationStatus::Verified, days_ago(0))];
    assert!(state.finish_load(1, Ok(stale), today()));
    assert!(state.list.page_items().is_empty());

    assert_eq!(state.begin_load(), Some(2));
    let fresh = vec![verification(5, (30, "Taller"), VerificationStatus::Pending, days_ago(1))];
    assert!(!state.finish_load(2, Ok(fresh), today()));
    assert_eq!(ids(&state), vec![5]);
}

#[test]
fn begin_load_needs_a_regional() {
    let mut state = VerificationsState::default();
    assert_eq!(state.begin_load(), None);
    assert!(!state.list.loading);
}

// =============================================================================
// CREATE
// =============================================================================

#[test]
fn plate_is_trimmed_and_uppercased() {
    assert_eq!(normalize_plate("  sena-0001 ").unwrap(), "SENA-0001");
    assert_eq!(normalize_plate("   ").unwrap_err().to_string(), "Ingrese la placa del bien");
}

#[test]
fn plate_not_found_message() {
    assert_eq!(
        plate_lookup_message("X-1", &ApiError::NotFound),
        "No se encontró un bien con la placa X-1"
    );
    assert_eq!(
        plate_lookup_message("X-1", &ApiError::Forbidden),
        ApiError::Forbidden.to_string()
    );
}

#[test]
fn create_request_needs_inventory() {
    let mut item = Item {
        id: 9,
        product_name: "Silla".to_owned(),
        licence_plate_number: Some("P-9".to_owned()),
        serial: None,
        inventory_id: None,
        status: true,
        acquisition_value: None,
        acquisition_date: None,
    };
    assert!(create_request(&item).is_err());
    item.inventory_id = Some(20);
    assert_eq!(create_request(&item).unwrap(), CreateVerification { item_id: 9, inventory_id: 20 });
}
