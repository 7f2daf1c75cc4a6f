use super::*;
use crate::net::types::UserRef;
use chrono::{NaiveDateTime, NaiveTime};

// =============================================================
// Helpers
// =============================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn on(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
}

fn item(id: i64, name: &str, plate: &str) -> ItemRef {
    ItemRef { id, product_name: name.to_owned(), licence_plate_number: Some(plate.to_owned()) }
}

fn cancellation(id: i64, requester: &str, reason: &str) -> Cancellation {
    Cancellation {
        id,
        requester: UserRef { id, full_name: requester.to_owned(), email: None },
        items: vec![item(100 + id, "Monitor", &format!("SENA-{id}"))],
        reason: reason.to_owned(),
        approved: false,
        refused_at: None,
        approved_at: None,
        requested_at: on(today()),
        comment: None,
        format_url: None,
        format_example_url: None,
    }
}

fn loaded() -> CancellationsState {
    let pending = cancellation(1, "Ana Gómez", "Pantalla rota");
    let mut approved = cancellation(2, "Luis Pérez", "Obsoleto");
    approved.approved = true;
    let mut refused = cancellation(3, "Eva Ruiz", "Sin uso");
    refused.refused_at = Some(on(today()));
    refused.requested_at = on(today() - chrono::Days::new(20));

    let mut state = CancellationsState::default();
    state.list.finish_load(vec![pending, approved, refused]);
    state.refresh(today());
    state
}

fn ids(state: &CancellationsState) -> Vec<i64> {
    state.list.filtered.iter().map(|c| c.id).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn pending_filter_keeps_unapproved_unrefused() {
    let mut state = loaded();
    state.filter.status = Some(CancellationStatus::Pending);
    state.refresh(today());
    assert_eq!(ids(&state), vec![1]);
}

#[test]
fn search_matches_requester_reason_or_item_case_insensitively() {
    let mut state = loaded();
    state.filter.search = SearchTerm::new("luis");
    state.refresh(today());
    assert_eq!(ids(&state), vec![2]);

    state.filter.search = SearchTerm::new("PANTALLA");
    state.refresh(today());
    assert_eq!(ids(&state), vec![1]);

    state.filter.search = SearchTerm::new("sena-3");
    state.refresh(today());
    assert_eq!(ids(&state), vec![3]);

    state.filter.search = SearchTerm::new("monitor");
    state.refresh(today());
    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[test]
fn today_range_uses_request_date() {
    let mut state = loaded();
    state.filter.date_range = DateRange::Today;
    state.refresh(today());
    assert_eq!(ids(&state), vec![1, 2]);

    state.filter.date_range = DateRange::Month;
    state.refresh(today());
    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[test]
fn refresh_resets_page() {
    let mut state = CancellationsState::default();
    state.list.finish_load((1..=25).map(|i| cancellation(i, "Ana", "x")).collect());
    state.refresh(today());
    assert!(state.list.go_to_page(2));
    state.filter.search = SearchTerm::new("ana");
    state.refresh(today());
    assert_eq!(state.list.pagination.page, 0);
}

#[test]
fn stats_count_loaded_rows_by_status() {
    let mut state = loaded();
    state.filter.status = Some(CancellationStatus::Approved);
    state.refresh(today());
    let values: Vec<usize> = state.stats().iter().map(|s| s.value).collect();
    assert_eq!(values, vec![3, 1, 1, 1]);
}

// =============================================================
// Draft
// =============================================================

#[test]
fn draft_rejects_duplicate_item() {
    let mut draft = CancellationDraft::default();
    draft.add_item(item(1, "Silla", "P-1")).unwrap();
    let err = draft.add_item(item(1, "Silla", "P-1")).unwrap_err();
    assert_eq!(err.to_string(), "Silla (P-1) ya está en la solicitud");
    assert_eq!(draft.items.len(), 1);
}

#[test]
fn draft_payload_requires_items_and_reason() {
    let mut draft = CancellationDraft::default();
    assert!(draft.to_payload().is_err());
    draft.add_item(item(1, "Silla", "P-1")).unwrap();
    draft.reason = "   ".to_owned();
    assert!(draft.to_payload().is_err());
    draft.reason = " Deterioro ".to_owned();
    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.item_ids, vec![1]);
    assert_eq!(payload.reason, "Deterioro");
}

#[test]
fn draft_remove_item() {
    let mut draft = CancellationDraft::default();
    draft.add_item(item(1, "Silla", "P-1")).unwrap();
    draft.add_item(item(2, "Mesa", "P-2")).unwrap();
    draft.remove_item(1);
    assert_eq!(draft.items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn action_exposes_target_id() {
    assert_eq!(CancellationAction::Refuse(9).id(), 9);
    assert_eq!(CancellationAction::Upload(4, FormatDocument::Example).id(), 4);
}
