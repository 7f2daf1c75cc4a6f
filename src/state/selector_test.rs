use super::*;

fn institution(id: i64) -> Institution {
    Institution { id, name: format!("Centro {id}"), regional_id: Some(1) }
}

fn inventory(id: i64) -> Inventory {
    Inventory {
        id,
        uuid: None,
        name: format!("Inventario {id}"),
        location: None,
        status: true,
        institution_id: Some(10),
        owner: None,
        managers: Vec::new(),
        signatories: Vec::new(),
    }
}

fn item(id: i64) -> Item {
    Item {
        id,
        product_name: format!("Bien {id}"),
        licence_plate_number: Some(format!("P-{id}")),
        serial: None,
        inventory_id: Some(20),
        status: true,
        acquisition_value: None,
        acquisition_date: None,
    }
}

fn fully_selected() -> CascadeState {
    let mut state = CascadeState::default();
    state.select_regional(Some(1));
    state.accept_institutions(1, vec![institution(10)]);
    state.select_institution(Some(10));
    state.accept_inventories(10, vec![inventory(20)]);
    state.select_inventory(Some(20));
    state.accept_items(20, vec![item(30)]);
    state.select_item(Some(30));
    state
}

#[test]
fn selecting_parent_requests_child_options() {
    let mut state = CascadeState::default();
    assert_eq!(state.select_regional(Some(1)), Some(CascadeFetch::Institutions(1)));
    assert_eq!(state.loading, Some(CascadeLevel::Institution));
    assert!(state.is_enabled(CascadeLevel::Institution));
    assert!(!state.is_enabled(CascadeLevel::Inventory));
}

#[test]
fn selecting_regional_clears_all_descendants() {
    let mut state = fully_selected();
    assert_eq!(state.selected_item().map(|i| i.id), Some(30));

    state.select_regional(Some(2));
    assert_eq!(state.institution_id, None);
    assert_eq!(state.inventory_id, None);
    assert_eq!(state.item_id, None);
    assert!(state.institutions.is_empty());
    assert!(state.inventories.is_empty());
    assert!(state.items.is_empty());
}

#[test]
fn selecting_institution_keeps_regional_level() {
    let mut state = fully_selected();
    assert_eq!(state.select_institution(Some(11)), Some(CascadeFetch::Inventories(11)));
    assert_eq!(state.regional_id, Some(1));
    assert_eq!(state.institutions.len(), 1);
    assert!(state.inventories.is_empty());
    assert!(state.items.is_empty());
}

#[test]
fn clearing_a_level_issues_no_fetch() {
    let mut state = fully_selected();
    assert_eq!(state.select_inventory(None), None);
    assert!(!state.is_enabled(CascadeLevel::Item));
    assert_eq!(state.loading, None);
}

#[test]
fn stale_responses_are_ignored() {
    let mut state = CascadeState::default();
    state.select_regional(Some(1));
    state.select_regional(Some(2));
    assert!(!state.accept_institutions(1, vec![institution(10)]));
    assert!(state.institutions.is_empty());
    assert!(state.accept_institutions(2, vec![institution(12)]));
    assert_eq!(state.loading, None);
}

#[test]
fn select_item_rejects_unknown_ids() {
    let mut state = fully_selected();
    state.select_item(Some(99));
    assert_eq!(state.item_id, None);
}

#[test]
fn set_regionals_drops_vanished_selection() {
    let mut state = fully_selected();
    state.set_regionals(vec![Regional { id: 5, name: "Caldas".to_owned() }]);
    assert_eq!(state.regional_id, None);
    assert!(state.institutions.is_empty());
}

#[test]
fn fetch_failed_stops_matching_spinner_only() {
    let mut state = CascadeState::default();
    state.select_regional(Some(1));
    state.fetch_failed(CascadeLevel::Item);
    assert_eq!(state.loading, Some(CascadeLevel::Institution));
    state.fetch_failed(CascadeLevel::Institution);
    assert_eq!(state.loading, None);
}
