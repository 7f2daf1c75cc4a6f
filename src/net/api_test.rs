use super::*;

#[test]
fn paged_paths_carry_page_and_size() {
    assert_eq!(users_path(0, 10), "/users?page=0&size=10");
    assert_eq!(cancellations_path(3, 25), "/cancellations?page=3&size=25");
    assert_eq!(inventory_items_path(9, 1, 50), "/items/inventory/9?page=1&size=50");
}

#[test]
fn organization_paths_match_backend_routes() {
    assert_eq!(institutions_path(4), "/institutions/institutionsByRegionalId/4");
    assert_eq!(institution_inventories_path(12), "/inventory/institution/12");
    assert_eq!(role_inventories_path(InventoryRole::Signatory), "/inventory/signatory");
}

#[test]
fn user_paths_embed_id() {
    assert_eq!(user_path(8), "/users/8");
    assert_eq!(user_status_path(8), "/users/8/status");
}

#[test]
fn role_members_path_rejects_owner() {
    assert_eq!(role_members_path(3, InventoryRole::Manager).unwrap(), "/inventory/3/managers");
    assert_eq!(role_members_path(3, InventoryRole::Signatory).unwrap(), "/inventory/3/signatories");
    assert!(matches!(role_members_path(3, InventoryRole::Owner), Err(ApiError::Validation(_))));
}

#[test]
fn quit_role_path_targets_current_user_membership() {
    assert_eq!(quit_role_path(5, InventoryRole::Manager).unwrap(), "/inventory/5/managers/me");
    assert_eq!(quit_role_path(5, InventoryRole::Signatory).unwrap(), "/inventory/5/signatories/me");
    assert!(quit_role_path(5, InventoryRole::Owner).is_err());
}

#[test]
fn item_by_plate_path_trims_and_escapes() {
    assert_eq!(item_by_plate_path(" SENA 01/2 "), "/items/licence-plate/SENA%2001%2F2");
}

#[test]
fn loan_paths() {
    assert_eq!(loan_filter_path(&LoanQuery::for_item(4)), "/loan/filter?itemId=4");
    assert_eq!(loan_filter_path(&LoanQuery::default()), "/loan/filter");
    assert_eq!(loan_path(11), "/loan/11");
}

#[test]
fn verification_paths() {
    assert_eq!(regional_verifications_path(2), "/verifications/regional/2");
    assert_eq!(inventory_verifications_path(6), "/verifications/inventory/6");
    assert_eq!(verification_evidence_path(6), "/verifications/6/evidence");
}

#[test]
fn cancellation_paths() {
    assert_eq!(cancellation_decision_path(1, true), "/cancellations/1/approve");
    assert_eq!(cancellation_decision_path(1, false), "/cancellations/1/refuse");
    assert_eq!(cancellation_document_path(1, FormatDocument::Format), "/cancellations/1/format");
    assert_eq!(
        cancellation_document_path(1, FormatDocument::Example),
        "/cancellations/1/format-example"
    );
}

#[test]
fn validate_lend_requires_item_and_responsible() {
    let ok = LendRequest { item_id: 1, responsible_id: 2, details: String::new() };
    assert!(validate_lend(&ok).is_ok());

    let no_item = LendRequest { item_id: 0, ..ok.clone() };
    assert_eq!(
        validate_lend(&no_item).unwrap_err().to_string(),
        "Seleccione el bien a prestar"
    );

    let no_responsible = LendRequest { responsible_id: 0, ..ok };
    assert_eq!(
        validate_lend(&no_responsible).unwrap_err().to_string(),
        "Seleccione el responsable del préstamo"
    );
}
