//! Endpoint helpers for the SGDIS REST backend.
//!
//! Each helper formats its path with the pure `*_path` functions below (unit
//! tested) and delegates transport to `ApiClient`. Paths are relative to the
//! configured API base.
//!
//! ERROR HANDLING
//! ==============
//! Helpers return `Result<_, ApiError>`; validation that does not need the
//! backend (e.g. quitting an owner role) fails before any request is sent.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiClient, Method, UploadFile, encode_component, with_query};
use super::types::{
    AssignRolePayload, Cancellation, CancellationDecision, CreateCancellation, CreateVerification, Institution,
    Inventory, InventoryRole, Item, LendRequest, Loan, LoanQuery, Page, Regional, ReturnRequest, User, UserPayload,
    Verification,
};
use crate::error::ApiError;
use crate::util::duplicate_loan;

// =============================================================================
// PATHS
// =============================================================================

fn paged(path: &str, page: usize, size: usize) -> String {
    with_query(path, &[("page", page.to_string()), ("size", size.to_string())])
}

fn users_path(page: usize, size: usize) -> String {
    paged("/users", page, size)
}

fn user_path(id: i64) -> String {
    format!("/users/{id}")
}

fn user_status_path(id: i64) -> String {
    format!("/users/{id}/status")
}

fn institutions_path(regional_id: i64) -> String {
    format!("/institutions/institutionsByRegionalId/{regional_id}")
}

fn institution_inventories_path(institution_id: i64) -> String {
    format!("/inventory/institution/{institution_id}")
}

fn role_inventories_path(role: InventoryRole) -> String {
    format!("/inventory/{}", role.segment())
}

fn role_members_path(inventory_id: i64, role: InventoryRole) -> Result<String, ApiError> {
    match role {
        InventoryRole::Manager => Ok(format!("/inventory/{inventory_id}/managers")),
        InventoryRole::Signatory => Ok(format!("/inventory/{inventory_id}/signatories")),
        InventoryRole::Owner => Err(ApiError::validation("El propietario no se asigna desde esta vista")),
    }
}

fn quit_role_path(inventory_id: i64, role: InventoryRole) -> Result<String, ApiError> {
    if !role.can_quit() {
        return Err(ApiError::validation("El propietario no puede abandonar su inventario"));
    }
    role_members_path(inventory_id, role).map(|p| format!("{p}/me"))
}

fn inventory_items_path(inventory_id: i64, page: usize, size: usize) -> String {
    paged(&format!("/items/inventory/{inventory_id}"), page, size)
}

fn item_by_plate_path(plate: &str) -> String {
    format!("/items/licence-plate/{}", encode_component(plate.trim()))
}

fn loan_filter_path(query: &LoanQuery) -> String {
    with_query("/loan/filter", &query.pairs())
}

fn loan_path(id: i64) -> String {
    format!("/loan/{id}")
}

fn regional_verifications_path(regional_id: i64) -> String {
    format!("/verifications/regional/{regional_id}")
}

fn inventory_verifications_path(inventory_id: i64) -> String {
    format!("/verifications/inventory/{inventory_id}")
}

fn verification_evidence_path(id: i64) -> String {
    format!("/verifications/{id}/evidence")
}

fn cancellations_path(page: usize, size: usize) -> String {
    paged("/cancellations", page, size)
}

fn cancellation_decision_path(id: i64, approve: bool) -> String {
    let action = if approve { "approve" } else { "refuse" };
    format!("/cancellations/{id}/{action}")
}

/// Which supporting document a cancellation upload carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatDocument {
    /// The signed decommission format.
    Format,
    /// The filled-in example attached for reviewers.
    Example,
}

fn cancellation_document_path(id: i64, document: FormatDocument) -> String {
    match document {
        FormatDocument::Format => format!("/cancellations/{id}/format"),
        FormatDocument::Example => format!("/cancellations/{id}/format-example"),
    }
}

// =============================================================================
// USERS
// =============================================================================

/// # Errors
///
/// Any transport or status failure (401 when the token is missing or expired).
pub async fn fetch_current_user(client: &ApiClient) -> Result<User, ApiError> {
    client.get_json("/users/me").await
}

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn fetch_users(client: &ApiClient, page: usize, size: usize) -> Result<Page<User>, ApiError> {
    client.get_json(&users_path(page, size)).await
}

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn create_user(client: &ApiClient, payload: &UserPayload) -> Result<User, ApiError> {
    client.send_json(Method::Post, "/users", payload).await
}

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn update_user(client: &ApiClient, id: i64, payload: &UserPayload) -> Result<User, ApiError> {
    client.send_json(Method::Put, &user_path(id), payload).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn toggle_user_status(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.send_unit::<()>(Method::Patch, &user_status_path(id), None).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn delete_user(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.send_unit::<()>(Method::Delete, &user_path(id), None).await
}

// =============================================================================
// ORGANIZATION & INVENTORIES
// =============================================================================

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn fetch_regionals(client: &ApiClient) -> Result<Vec<Regional>, ApiError> {
    client.get_json::<Page<Regional>>("/regional").await.map(|p| p.content)
}

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn fetch_institutions(client: &ApiClient, regional_id: i64) -> Result<Vec<Institution>, ApiError> {
    client
        .get_json::<Page<Institution>>(&institutions_path(regional_id))
        .await
        .map(|p| p.content)
}

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn fetch_institution_inventories(client: &ApiClient, institution_id: i64) -> Result<Vec<Inventory>, ApiError> {
    client
        .get_json::<Page<Inventory>>(&institution_inventories_path(institution_id))
        .await
        .map(|p| p.content)
}

/// Every inventory the current user holds any role on.
///
/// # Errors
///
/// Any transport, status or decode failure.
pub async fn fetch_my_inventories(client: &ApiClient) -> Result<Vec<Inventory>, ApiError> {
    client.get_json::<Page<Inventory>>("/inventory/me").await.map(|p| p.content)
}

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn fetch_role_inventories(client: &ApiClient, role: InventoryRole) -> Result<Vec<Inventory>, ApiError> {
    client
        .get_json::<Page<Inventory>>(&role_inventories_path(role))
        .await
        .map(|p| p.content)
}

/// Delegate a manager or signatory role to the user with `email`.
///
/// # Errors
///
/// Validation failure for blank email or the owner role, then any transport
/// or status failure.
pub async fn assign_inventory_role(
    client: &ApiClient,
    inventory_id: i64,
    role: InventoryRole,
    email: &str,
) -> Result<(), ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Ingrese el correo del usuario"));
    }
    let path = role_members_path(inventory_id, role)?;
    let payload = AssignRolePayload { email: email.to_owned() };
    client.send_unit(Method::Post, &path, Some(&payload)).await
}

/// Drop the current user's `role` on an inventory.
///
/// # Errors
///
/// Validation failure for the owner role, then any transport or status failure.
pub async fn quit_inventory_role(client: &ApiClient, inventory_id: i64, role: InventoryRole) -> Result<(), ApiError> {
    let path = quit_role_path(inventory_id, role)?;
    client.send_unit::<()>(Method::Delete, &path, None).await
}

// =============================================================================
// ITEMS
// =============================================================================

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn fetch_inventory_items(
    client: &ApiClient,
    inventory_id: i64,
    page: usize,
    size: usize,
) -> Result<Page<Item>, ApiError> {
    client.get_json(&inventory_items_path(inventory_id, page, size)).await
}

/// Look an item up by licence plate. A 404 surfaces as `ApiError::NotFound`.
///
/// # Errors
///
/// Validation failure for a blank plate, then any transport, status or
/// decode failure.
pub async fn fetch_item_by_plate(client: &ApiClient, plate: &str) -> Result<Item, ApiError> {
    if plate.trim().is_empty() {
        return Err(ApiError::validation("Ingrese la placa del bien"));
    }
    client.get_json(&item_by_plate_path(plate)).await
}

// =============================================================================
// LOANS
// =============================================================================

/// Result of a lend, including a removed double submission if any.
#[derive(Clone, Debug, PartialEq)]
pub struct LendOutcome {
    pub loan: Loan,
    pub removed_duplicate: Option<i64>,
}

/// Lend an item, then clean up a double submission.
///
/// The request carries an `Idempotency-Key` so the backend can reject a
/// replay on its own. Afterwards the item's loans are re-fetched and, if the
/// two most recent are identical and created within the configured window,
/// the older one is deleted. Cleanup failures are logged, never returned.
///
/// # Errors
///
/// Validation failure for a missing item or responsible user, then any
/// transport, status or decode failure of the lend itself.
pub async fn lend_item(client: &ApiClient, request: &LendRequest) -> Result<LendOutcome, ApiError> {
    validate_lend(request)?;
    let key = uuid::Uuid::new_v4().to_string();
    let loan: Loan = client
        .send_json_with_headers(Method::Post, "/loan/lend", request, &[("Idempotency-Key", key)])
        .await?;

    let removed_duplicate = match filter_loans(client, &LoanQuery::for_item(request.item_id)).await {
        Ok(loans) => remove_duplicate(client, &loans).await,
        Err(e) => {
            leptos::logging::warn!("duplicate check skipped for item {}: {e}", request.item_id);
            None
        }
    };
    Ok(LendOutcome { loan, removed_duplicate })
}

async fn remove_duplicate(client: &ApiClient, loans: &[Loan]) -> Option<i64> {
    let window = client.config().duplicate_loan_window;
    let older = duplicate_loan::find_duplicate(loans, window)?;
    match delete_loan(client, older).await {
        Ok(()) => {
            leptos::logging::log!("removed duplicate loan {older}");
            Some(older)
        }
        Err(e) => {
            leptos::logging::warn!("failed to remove duplicate loan {older}: {e}");
            None
        }
    }
}

fn validate_lend(request: &LendRequest) -> Result<(), ApiError> {
    if request.item_id <= 0 {
        return Err(ApiError::validation("Seleccione el bien a prestar"));
    }
    if request.responsible_id <= 0 {
        return Err(ApiError::validation("Seleccione el responsable del préstamo"));
    }
    Ok(())
}

/// # Errors
///
/// Any transport or status failure.
pub async fn return_item(client: &ApiClient, request: &ReturnRequest) -> Result<(), ApiError> {
    client.send_unit(Method::Post, "/loan/return", Some(request)).await
}

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn filter_loans(client: &ApiClient, query: &LoanQuery) -> Result<Vec<Loan>, ApiError> {
    client.get_json::<Page<Loan>>(&loan_filter_path(query)).await.map(|p| p.content)
}

/// # Errors
///
/// Any transport or status failure.
pub async fn delete_loan(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.send_unit::<()>(Method::Delete, &loan_path(id), None).await
}

// =============================================================================
// VERIFICATIONS
// =============================================================================

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn fetch_regional_verifications(client: &ApiClient, regional_id: i64) -> Result<Vec<Verification>, ApiError> {
    client
        .get_json::<Page<Verification>>(&regional_verifications_path(regional_id))
        .await
        .map(|p| p.content)
}

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn fetch_inventory_verifications(
    client: &ApiClient,
    inventory_id: i64,
) -> Result<Vec<Verification>, ApiError> {
    client
        .get_json::<Page<Verification>>(&inventory_verifications_path(inventory_id))
        .await
        .map(|p| p.content)
}

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn create_verification(client: &ApiClient, payload: &CreateVerification) -> Result<Verification, ApiError> {
    client.send_json(Method::Post, "/verifications", payload).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn upload_verification_evidence(client: &ApiClient, id: i64, file: &UploadFile) -> Result<(), ApiError> {
    client.upload(&verification_evidence_path(id), file).await
}

// =============================================================================
// CANCELLATIONS
// =============================================================================

/// # Errors
///
/// Any transport, status or decode failure.
pub async fn fetch_cancellations(client: &ApiClient, page: usize, size: usize) -> Result<Page<Cancellation>, ApiError> {
    client.get_json(&cancellations_path(page, size)).await
}

/// # Errors
///
/// Validation failure for an empty item list or reason, then any transport,
/// status or decode failure.
pub async fn create_cancellation(client: &ApiClient, payload: &CreateCancellation) -> Result<Cancellation, ApiError> {
    if payload.item_ids.is_empty() {
        return Err(ApiError::validation("Agregue al menos un bien a la solicitud"));
    }
    if payload.reason.trim().is_empty() {
        return Err(ApiError::validation("Indique el motivo de la baja"));
    }
    client.send_json(Method::Post, "/cancellations", payload).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn approve_cancellation(client: &ApiClient, id: i64, comment: Option<String>) -> Result<(), ApiError> {
    let decision = CancellationDecision { comment: comment.filter(|c| !c.trim().is_empty()) };
    client
        .send_unit(Method::Put, &cancellation_decision_path(id, true), Some(&decision))
        .await
}

/// # Errors
///
/// Validation failure for a blank comment, then any transport or status failure.
pub async fn refuse_cancellation(client: &ApiClient, id: i64, comment: &str) -> Result<(), ApiError> {
    let comment = comment.trim();
    if comment.is_empty() {
        return Err(ApiError::validation("Indique el motivo del rechazo"));
    }
    let decision = CancellationDecision { comment: Some(comment.to_owned()) };
    client
        .send_unit(Method::Put, &cancellation_decision_path(id, false), Some(&decision))
        .await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn upload_cancellation_document(
    client: &ApiClient,
    id: i64,
    document: FormatDocument,
    file: &UploadFile,
) -> Result<(), ApiError> {
    client.upload(&cancellation_document_path(id, document), file).await
}
