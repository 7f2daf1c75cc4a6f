//! Reports page state: report kind, scope, fetched data and the derived
//! table and aggregate cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page asks `ReportsState::source` what to fetch for the chosen kind
//! and cascade scope, stores the result with `finish_load`, and renders
//! `table` as a preview. Export buttons hand the same table to
//! `export::excel` / `export::pdf`.
//!
//! ERROR HANDLING
//! ==============
//! A missing scope is a validation error raised before any request. A failed
//! fetch clears the previous preview so exports never ship stale data.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use chrono::{NaiveDate, NaiveDateTime};

use super::list::Stat;
use super::selector::CascadeState;
use crate::error::ApiError;
use crate::export::{Column, ColumnKind, ReportTable};
use crate::net::types::{Inventory, Item, Loan, LoanQuery, Role, User, Verification, VerificationStatus};
use crate::util::date_range::DateRange;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportKind {
    #[default]
    Items,
    Users,
    Loans,
    Verifications,
    Inventories,
}

impl ReportKind {
    pub const ALL: [Self; 5] = [Self::Items, Self::Users, Self::Loans, Self::Verifications, Self::Inventories];

    pub fn label(self) -> &'static str {
        match self {
            Self::Items => "Bienes del inventario",
            Self::Users => "Usuarios",
            Self::Loans => "Préstamos",
            Self::Verifications => "Verificaciones",
            Self::Inventories => "Inventarios",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Users => "users",
            Self::Loans => "loans",
            Self::Verifications => "verifications",
            Self::Inventories => "inventories",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::ALL.into_iter().find(|k| k.code() == code).unwrap_or_default()
    }

    /// Whether the date range filter applies to this kind.
    pub fn is_dated(self) -> bool {
        matches!(self, Self::Items | Self::Loans | Self::Verifications)
    }
}

/// Request the page must issue to load a report.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportSource {
    Items(i64),
    Users,
    Loans(LoanQuery),
    /// Every verification of a regional.
    Verifications(i64),
    /// Verifications narrowed to one inventory.
    InventoryVerifications(i64),
    Inventories(i64),
}

/// Fetched rows for one report kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportData {
    Items(Vec<Item>),
    Users(Vec<User>),
    Loans(Vec<Loan>),
    Verifications(Vec<Verification>),
    Inventories(Vec<Inventory>),
}

impl ReportData {
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::Items(_) => ReportKind::Items,
            Self::Users(_) => ReportKind::Users,
            Self::Loans(_) => ReportKind::Loans,
            Self::Verifications(_) => ReportKind::Verifications,
            Self::Inventories(_) => ReportKind::Inventories,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Items(rows) => rows.len(),
            Self::Users(rows) => rows.len(),
            Self::Loans(rows) => rows.len(),
            Self::Verifications(rows) => rows.len(),
            Self::Inventories(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only rows whose reference date falls in `range`. Items without
    /// an acquisition date only survive the unbounded range.
    #[must_use]
    pub fn within(self, range: DateRange, today: NaiveDate) -> Self {
        match self {
            Self::Items(rows) => Self::Items(
                rows.into_iter()
                    .filter(|i| range.contains_opt(i.acquisition_date, today))
                    .collect(),
            ),
            Self::Loans(rows) => {
                Self::Loans(rows.into_iter().filter(|l| range.contains(l.lend_at.date(), today)).collect())
            }
            Self::Verifications(rows) => Self::Verifications(
                rows.into_iter()
                    .filter(|v| range.contains(v.created_at.date(), today))
                    .collect(),
            ),
            other => other,
        }
    }

    pub fn table(&self, generated_at: NaiveDateTime) -> ReportTable {
        let title = self.kind().label();
        match self {
            Self::Items(rows) => ReportTable::build(title, generated_at, &item_columns(), rows),
            Self::Users(rows) => ReportTable::build(title, generated_at, &user_columns(), rows),
            Self::Loans(rows) => ReportTable::build(title, generated_at, &loan_columns(), rows),
            Self::Verifications(rows) => ReportTable::build(title, generated_at, &verification_columns(), rows),
            Self::Inventories(rows) => ReportTable::build(title, generated_at, &inventory_columns(), rows),
        }
    }

    /// Aggregate cards: totals broken down by status or role.
    pub fn aggregates(&self) -> Vec<Stat> {
        let mut stats = vec![Stat::new("Total", self.len(), "total")];
        match self {
            Self::Items(rows) => {
                let active = rows.iter().filter(|i| i.status).count();
                stats.push(Stat::new("Activos", active, "success"));
                stats.push(Stat::new("Inactivos", rows.len() - active, "danger"));
            }
            Self::Users(rows) => {
                for role in Role::ASSIGNABLE {
                    let count = rows.iter().filter(|u| u.role == role).count();
                    if count > 0 {
                        stats.push(Stat::new(role.label(), count, "info"));
                    }
                }
            }
            Self::Loans(rows) => {
                let active = rows.iter().filter(|l| !l.returned).count();
                stats.push(Stat::new("Activos", active, "pending"));
                stats.push(Stat::new("Devueltos", rows.len() - active, "success"));
            }
            Self::Verifications(rows) => {
                for (status, tone) in VerificationStatus::KNOWN.into_iter().zip(["pending", "success", "danger"]) {
                    let count = rows.iter().filter(|v| v.status == status).count();
                    stats.push(Stat::new(status.label(), count, tone));
                }
            }
            Self::Inventories(rows) => {
                let active = rows.iter().filter(|i| i.status).count();
                stats.push(Stat::new("Activos", active, "success"));
                stats.push(Stat::new("Inactivos", rows.len() - active, "danger"));
            }
        }
        stats
    }
}

// =============================================================================
// COLUMNS
// =============================================================================

fn item_columns() -> Vec<Column<Item>> {
    vec![
        Column::new("Placa", ColumnKind::String, 1.4, |i: &Item| i.licence_plate_number.as_deref().into()),
        Column::new("Producto", ColumnKind::String, 3.0, |i: &Item| i.product_name.as_str().into()),
        Column::new("Serial", ColumnKind::String, 1.4, |i: &Item| i.serial.as_deref().into()),
        Column::new("Valor", ColumnKind::Currency, 1.4, |i: &Item| i.acquisition_value.into()),
        Column::new("Adquisición", ColumnKind::Date, 1.2, |i: &Item| i.acquisition_date.into()),
        Column::new("Activo", ColumnKind::Boolean, 0.8, |i: &Item| i.status.into()),
    ]
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("Nombre", ColumnKind::String, 2.4, |u: &User| u.full_name.as_str().into()),
        Column::new("Correo", ColumnKind::String, 2.6, |u: &User| u.email.as_str().into()),
        Column::new("Cargo", ColumnKind::String, 1.6, |u: &User| u.job_title.as_deref().into()),
        Column::new("Rol", ColumnKind::String, 1.8, |u: &User| u.role.label().into()),
        Column::new("Centro", ColumnKind::String, 2.0, |u: &User| u.institution_name.as_deref().into()),
        Column::new("Activo", ColumnKind::Boolean, 0.8, |u: &User| u.status.into()),
    ]
}

fn loan_columns() -> Vec<Column<Loan>> {
    vec![
        Column::new("Bien", ColumnKind::String, 2.6, |l: &Loan| l.item.display().into()),
        Column::new("Responsable", ColumnKind::String, 2.0, |l: &Loan| l.responsible.full_name.as_str().into()),
        Column::new("Prestado por", ColumnKind::String, 2.0, |l: &Loan| {
            l.lender.as_ref().map(|u| u.full_name.as_str()).into()
        }),
        Column::new("Fecha préstamo", ColumnKind::Date, 1.2, |l: &Loan| Some(l.lend_at.date()).into()),
        Column::new("Fecha devolución", ColumnKind::Date, 1.2, |l: &Loan| l.return_at.map(|d| d.date()).into()),
        Column::new("Devuelto", ColumnKind::Boolean, 0.9, |l: &Loan| l.returned.into()),
    ]
}

fn verification_columns() -> Vec<Column<Verification>> {
    vec![
        Column::new("Bien", ColumnKind::String, 2.6, |v: &Verification| v.item.display().into()),
        Column::new("Inventario", ColumnKind::String, 2.0, |v: &Verification| v.inventory_name.as_deref().into()),
        Column::new("Estado", ColumnKind::String, 1.3, |v: &Verification| v.status.label().into()),
        Column::new("Verificado por", ColumnKind::String, 2.0, |v: &Verification| {
            v.user.as_ref().map(|u| u.full_name.as_str()).into()
        }),
        Column::new("Fecha", ColumnKind::Date, 1.2, |v: &Verification| Some(v.created_at.date()).into()),
        Column::new("Evidencia", ColumnKind::Boolean, 0.9, |v: &Verification| v.photo_url.is_some().into()),
    ]
}

fn inventory_columns() -> Vec<Column<Inventory>> {
    vec![
        Column::new("Nombre", ColumnKind::String, 2.6, |i: &Inventory| i.name.as_str().into()),
        Column::new("Ubicación", ColumnKind::String, 2.0, |i: &Inventory| i.location.as_deref().into()),
        Column::new("Propietario", ColumnKind::String, 2.0, |i: &Inventory| i.owner_name().into()),
        Column::new("Manejadores", ColumnKind::String, 0.9, |i: &Inventory| i.managers.len().into()),
        Column::new("Firmantes", ColumnKind::String, 0.9, |i: &Inventory| i.signatories.len().into()),
        Column::new("Activo", ColumnKind::Boolean, 0.8, |i: &Inventory| i.status.into()),
    ]
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct ReportsState {
    pub kind: ReportKind,
    pub date_range: DateRange,
    pub data: Option<ReportData>,
    pub table: Option<ReportTable>,
    pub stats: Vec<Stat>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ReportsState {
    /// Switching kind discards the previous preview.
    pub fn set_kind(&mut self, kind: ReportKind) {
        if self.kind != kind {
            self.kind = kind;
            self.clear();
        }
    }

    /// Resolve what to fetch for the current kind from the cascade scope.
    ///
    /// # Errors
    ///
    /// `ApiError::Validation` naming the missing scope level.
    pub fn source(&self, scope: &CascadeState) -> Result<ReportSource, ApiError> {
        match self.kind {
            ReportKind::Items => scope
                .inventory_id
                .map(ReportSource::Items)
                .ok_or_else(|| ApiError::validation("Seleccione un inventario")),
            ReportKind::Users => Ok(ReportSource::Users),
            ReportKind::Loans => Ok(ReportSource::Loans(LoanQuery {
                item_id: scope.item_id,
                ..LoanQuery::default()
            })),
            ReportKind::Verifications => scope
                .inventory_id
                .map(ReportSource::InventoryVerifications)
                .or_else(|| scope.regional_id.map(ReportSource::Verifications))
                .ok_or_else(|| ApiError::validation("Seleccione una regional")),
            ReportKind::Inventories => scope
                .institution_id
                .map(ReportSource::Inventories)
                .ok_or_else(|| ApiError::validation("Seleccione un centro")),
        }
    }

    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Store fetched rows and derive preview and cards. Data for a kind
    /// other than the current one (user switched mid-request) is dropped.
    pub fn finish_load(&mut self, data: ReportData, today: NaiveDate, generated_at: NaiveDateTime) {
        self.loading = false;
        if data.kind() != self.kind {
            return;
        }
        let data = data.within(self.date_range, today);
        self.stats = data.aggregates();
        self.table = Some(data.table(generated_at));
        self.data = Some(data);
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.clear();
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Preview table ready for export; `None` until a non-empty load.
    pub fn exportable(&self) -> Option<&ReportTable> {
        self.table.as_ref().filter(|t| !t.is_empty())
    }

    fn clear(&mut self) {
        self.data = None;
        self.table = None;
        self.stats.clear();
        self.error = None;
    }
}
