use super::*;
use crate::net::types::UserRef;

const ME: i64 = 2;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn user(id: i64) -> UserRef {
    UserRef { id, full_name: format!("Usuario {id}"), email: None }
}

fn inventory(id: i64, name: &str, owner: i64, managers: &[i64], signatories: &[i64]) -> Inventory {
    Inventory {
        id,
        uuid: Some(format!("uuid-{id}")),
        name: name.to_owned(),
        location: Some("Sede principal".to_owned()),
        status: true,
        institution_id: Some(1),
        owner: Some(user(owner)),
        managers: managers.iter().copied().map(user).collect(),
        signatories: signatories.iter().copied().map(user).collect(),
    }
}

fn state_with(items: Vec<Inventory>, role: Option<InventoryRole>) -> InventoriesState {
    let mut state = InventoriesState::default();
    state.filter.user_id = Some(ME);
    state.filter.role = role;
    state.list.finish_load(items);
    state.refresh(today());
    state
}

fn ids(state: &InventoriesState) -> Vec<i64> {
    state.list.filtered.iter().map(|i| i.id).collect()
}

#[test]
fn role_tab_keeps_inventories_where_user_holds_role() {
    let items = vec![
        inventory(1, "Sistemas", ME, &[], &[]),
        inventory(2, "Electrónica", 9, &[ME], &[]),
        inventory(3, "Biblioteca", 9, &[], &[ME]),
    ];
    assert_eq!(ids(&state_with(items.clone(), Some(InventoryRole::Owner))), vec![1]);
    assert_eq!(ids(&state_with(items.clone(), Some(InventoryRole::Manager))), vec![2]);
    assert_eq!(ids(&state_with(items.clone(), Some(InventoryRole::Signatory))), vec![3]);
    assert_eq!(ids(&state_with(items, None)), vec![1, 2, 3]);
}

#[test]
fn reload_after_quitting_manager_drops_inventory_from_manager_tab() {
    let before = vec![inventory(2, "Electrónica", 9, &[ME, 5], &[ME])];
    let state = state_with(before, Some(InventoryRole::Manager));
    assert_eq!(ids(&state), vec![2]);

    let after = vec![inventory(2, "Electrónica", 9, &[5], &[ME])];
    let mut state = state_with(after, Some(InventoryRole::Manager));
    assert!(ids(&state).is_empty());

    state.filter.role = Some(InventoryRole::Signatory);
    state.refresh(today());
    assert_eq!(ids(&state), vec![2]);
}

#[test]
fn role_tab_without_user_matches_nothing() {
    let mut state = state_with(vec![inventory(1, "Sistemas", ME, &[], &[])], Some(InventoryRole::Owner));
    state.filter.user_id = None;
    state.refresh(today());
    assert!(ids(&state).is_empty());
}

#[test]
fn search_and_status_filters_combine() {
    let mut inactive = inventory(4, "Sistemas viejo", ME, &[], &[]);
    inactive.status = false;
    let mut state = state_with(vec![inventory(1, "Sistemas", ME, &[], &[]), inactive], None);
    state.filter.search = SearchTerm::new("sistemas");
    state.filter.status = Some(true);
    state.refresh(today());
    assert_eq!(ids(&state), vec![1]);

    state.filter.search = SearchTerm::new("usuario 2");
    state.filter.status = None;
    state.refresh(today());
    assert_eq!(ids(&state), vec![1, 4]);
}

#[test]
fn quittable_roles_exclude_ownership() {
    let inv = inventory(1, "Sistemas", ME, &[ME], &[ME]);
    assert_eq!(
        InventoriesState::quittable_roles(&inv, ME),
        vec![InventoryRole::Manager, InventoryRole::Signatory]
    );
}

#[test]
fn stats_count_roles_for_user() {
    let state = state_with(
        vec![
            inventory(1, "A", ME, &[], &[]),
            inventory(2, "B", 9, &[ME], &[ME]),
            inventory(3, "C", 9, &[ME], &[]),
        ],
        None,
    );
    let values: Vec<usize> = state.stats().iter().map(|s| s.value).collect();
    assert_eq!(values, vec![3, 1, 2, 1]);
}
