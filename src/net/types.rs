//! Wire DTOs for the SGDIS REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional fields default
//! so that older backend builds missing a column still decode; enums carry a
//! catch-all `Unknown` variant for the same reason.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

fn default_true() -> bool {
    true
}

// =============================================================================
// PAGE ENVELOPE
// =============================================================================

/// A list response, either a Spring page or a bare array.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
    pub last: bool,
}

impl<T> Page<T> {
    /// Wrap an unpaginated list as a single page.
    pub fn single(content: Vec<T>) -> Self {
        let total_elements = content.len() as u64;
        Self { content, total_pages: 1, total_elements, last: true }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Paged(PageRepr<T>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageRepr<T> {
    #[serde(default = "Vec::new")]
    content: Vec<T>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    total_elements: Option<u64>,
    #[serde(default)]
    last: Option<bool>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ListBody::<T>::deserialize(deserializer)? {
            ListBody::Bare(content) => Ok(Self::single(content)),
            ListBody::Paged(repr) => {
                let total_elements = repr.total_elements.unwrap_or(repr.content.len() as u64);
                let total_pages = repr.total_pages.unwrap_or(1);
                Ok(Self {
                    content: repr.content,
                    total_pages,
                    total_elements,
                    last: repr.last.unwrap_or(true),
                })
            }
        }
    }
}

// =============================================================================
// ORGANIZATION
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Regional {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub regional_id: Option<i64>,
}

// =============================================================================
// USERS
// =============================================================================

/// Application role as sent by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Superadmin,
    AdminRegional,
    AdminInstitution,
    Warehouse,
    User,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles an administrator can assign from the users page.
    pub const ASSIGNABLE: [Self; 5] =
        [Self::Superadmin, Self::AdminRegional, Self::AdminInstitution, Self::Warehouse, Self::User];

    pub fn label(self) -> &'static str {
        match self {
            Self::Superadmin => "Superadministrador",
            Self::AdminRegional => "Administrador regional",
            Self::AdminInstitution => "Administrador de centro",
            Self::Warehouse => "Almacenista",
            Self::User => "Usuario",
            Self::Unknown => "Desconocido",
        }
    }

    /// Wire name, used as `<option>` value.
    pub fn code(self) -> &'static str {
        match self {
            Self::Superadmin => "SUPERADMIN",
            Self::AdminRegional => "ADMIN_REGIONAL",
            Self::AdminInstitution => "ADMIN_INSTITUTION",
            Self::Warehouse => "WAREHOUSE",
            Self::User => "USER",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ASSIGNABLE.into_iter().find(|r| r.code() == code)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub job_title: Option<String>,
    pub role: Role,
    #[serde(default = "default_true")]
    pub status: bool,
    #[serde(default)]
    pub institution_name: Option<String>,
}

/// Compact user reference embedded in other records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body for creating or updating a user.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub full_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub role: Role,
    pub status: bool,
}

// =============================================================================
// INVENTORIES & ITEMS
// =============================================================================

/// Delegated role a user can hold on an inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryRole {
    Owner,
    Manager,
    Signatory,
}

impl InventoryRole {
    pub const ALL: [Self; 3] = [Self::Owner, Self::Manager, Self::Signatory];

    pub fn label(self) -> &'static str {
        match self {
            Self::Owner => "Propietario",
            Self::Manager => "Manejador",
            Self::Signatory => "Firmante",
        }
    }

    /// Path segment used by role-scoped inventory endpoints.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Manager => "manager",
            Self::Signatory => "signatory",
        }
    }

    /// Owners transfer ownership instead of quitting.
    pub fn can_quit(self) -> bool {
        !matches!(self, Self::Owner)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: i64,
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub status: bool,
    #[serde(default)]
    pub institution_id: Option<i64>,
    #[serde(default)]
    pub owner: Option<UserRef>,
    #[serde(default)]
    pub managers: Vec<UserRef>,
    #[serde(default)]
    pub signatories: Vec<UserRef>,
}

impl Inventory {
    pub fn has_role(&self, user_id: i64, role: InventoryRole) -> bool {
        match role {
            InventoryRole::Owner => self.owner.as_ref().is_some_and(|o| o.id == user_id),
            InventoryRole::Manager => self.managers.iter().any(|m| m.id == user_id),
            InventoryRole::Signatory => self.signatories.iter().any(|s| s.id == user_id),
        }
    }

    /// Every role `user_id` holds on this inventory, in `InventoryRole::ALL` order.
    pub fn roles_of(&self, user_id: i64) -> Vec<InventoryRole> {
        InventoryRole::ALL.into_iter().filter(|r| self.has_role(user_id, *r)).collect()
    }

    pub fn owner_name(&self) -> &str {
        self.owner.as_ref().map_or("", |o| o.full_name.as_str())
    }
}

/// Body for assigning a manager or signatory by email.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssignRolePayload {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub product_name: String,
    #[serde(default)]
    pub licence_plate_number: Option<String>,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub inventory_id: Option<i64>,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub acquisition_value: Option<f64>,
    #[serde(default)]
    pub acquisition_date: Option<NaiveDate>,
}

impl Item {
    pub fn to_ref(&self) -> ItemRef {
        ItemRef {
            id: self.id,
            product_name: self.product_name.clone(),
            licence_plate_number: self.licence_plate_number.clone(),
        }
    }
}

/// Compact item reference embedded in other records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRef {
    pub id: i64,
    pub product_name: String,
    #[serde(default)]
    pub licence_plate_number: Option<String>,
}

impl ItemRef {
    /// `"Laptop (SENA-001)"`, or just the name without a plate.
    pub fn display(&self) -> String {
        match &self.licence_plate_number {
            Some(plate) if !plate.is_empty() => format!("{} ({plate})", self.product_name),
            _ => self.product_name.clone(),
        }
    }
}

// =============================================================================
// LOANS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i64,
    pub item: ItemRef,
    pub responsible: UserRef,
    #[serde(default)]
    pub lender: Option<UserRef>,
    pub lend_at: NaiveDateTime,
    #[serde(default)]
    pub return_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub returned: bool,
    #[serde(default)]
    pub details_lend: Option<String>,
    #[serde(default)]
    pub details_return: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LendRequest {
    pub item_id: i64,
    pub responsible_id: i64,
    pub details: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub loan_id: i64,
    pub details: String,
}

/// Query for `/loan/filter`; absent fields are not sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoanQuery {
    pub item_id: Option<i64>,
    pub responsible_id: Option<i64>,
    pub returned: Option<bool>,
}

impl LoanQuery {
    pub fn for_item(item_id: i64) -> Self {
        Self { item_id: Some(item_id), ..Self::default() }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.item_id {
            pairs.push(("itemId", id.to_string()));
        }
        if let Some(id) = self.responsible_id {
            pairs.push(("responsibleId", id.to_string()));
        }
        if let Some(returned) = self.returned {
            pairs.push(("returned", returned.to_string()));
        }
        pairs
    }
}

// =============================================================================
// VERIFICATIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Missing,
    #[serde(other)]
    Unknown,
}

impl VerificationStatus {
    pub const KNOWN: [Self; 3] = [Self::Pending, Self::Verified, Self::Missing];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Verified => "Verificado",
            Self::Missing => "No encontrado",
            Self::Unknown => "Desconocido",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
            Self::Missing => "MISSING",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::KNOWN.into_iter().find(|s| s.code() == code)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub id: i64,
    pub item: ItemRef,
    pub inventory_id: i64,
    #[serde(default)]
    pub inventory_name: Option<String>,
    pub status: VerificationStatus,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVerification {
    pub item_id: i64,
    pub inventory_id: i64,
}

// =============================================================================
// CANCELLATIONS
// =============================================================================

/// Workflow state derived from `approved` and `refused_at`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CancellationStatus {
    Pending,
    Approved,
    Refused,
}

impl CancellationStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Refused];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Approved => "Aprobada",
            Self::Refused => "Rechazada",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Refused => "refused",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cancellation {
    pub id: i64,
    pub requester: UserRef,
    #[serde(default)]
    pub items: Vec<ItemRef>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub refused_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,
    pub requested_at: NaiveDateTime,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub format_url: Option<String>,
    #[serde(default)]
    pub format_example_url: Option<String>,
}

impl Cancellation {
    pub fn status(&self) -> CancellationStatus {
        if self.approved {
            CancellationStatus::Approved
        } else if self.refused_at.is_some() {
            CancellationStatus::Refused
        } else {
            CancellationStatus::Pending
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCancellation {
    pub item_ids: Vec<i64>,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CancellationDecision {
    pub comment: Option<String>,
}
