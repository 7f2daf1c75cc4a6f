//! Verifications page state.
//!
//! The page loads every verification of one regional, then narrows
//! locally by inventory, status, search and date range. Creating a
//! verification starts from a licence plate lookup.

#[cfg(test)]
#[path = "verifications_test.rs"]
mod verifications_test;

use chrono::NaiveDate;

use super::list::{ListFilter, ListPage, Stat};
use crate::error::ApiError;
use crate::net::types::{CreateVerification, Item, Verification, VerificationStatus};
use crate::util::date_range::DateRange;
use crate::util::search::SearchTerm;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerificationFilter {
    pub status: Option<VerificationStatus>,
    pub inventory_id: Option<i64>,
    pub search: SearchTerm,
    pub date_range: DateRange,
}

impl ListFilter<Verification> for VerificationFilter {
    fn matches(&self, v: &Verification, today: NaiveDate) -> bool {
        if self.status.is_some_and(|s| s != v.status) || self.inventory_id.is_some_and(|id| id != v.inventory_id) {
            return false;
        }
        if !self.date_range.contains(v.created_at.date(), today) {
            return false;
        }
        self.search.matches(
            [
                Some(v.item.product_name.as_str()),
                v.item.licence_plate_number.as_deref(),
                v.inventory_name.as_deref(),
                v.user.as_ref().map(|u| u.full_name.as_str()),
            ]
            .into_iter()
            .flatten(),
        )
    }
}

/// Normalize a typed licence plate; blank input is a validation error.
///
/// # Errors
///
/// `ApiError::Validation` when the plate is empty after trimming.
pub fn normalize_plate(raw: &str) -> Result<String, ApiError> {
    let plate = raw.trim();
    if plate.is_empty() {
        return Err(ApiError::validation("Ingrese la placa del bien"));
    }
    Ok(plate.to_uppercase())
}

/// Map a plate lookup failure to the message shown in the create modal.
pub fn plate_lookup_message(plate: &str, err: &ApiError) -> String {
    if err.is_not_found() {
        format!("No se encontró un bien con la placa {plate}")
    } else {
        err.to_string()
    }
}

/// Build the create payload from a looked-up item.
///
/// # Errors
///
/// `ApiError::Validation` when the item carries no inventory.
pub fn create_request(item: &Item) -> Result<CreateVerification, ApiError> {
    let inventory_id = item
        .inventory_id
        .ok_or_else(|| ApiError::validation("El bien no pertenece a ningún inventario"))?;
    Ok(CreateVerification { item_id: item.id, inventory_id })
}

#[derive(Clone, Debug, Default)]
pub struct VerificationsState {
    pub list: ListPage<Verification>,
    pub filter: VerificationFilter,
    pub regional_id: Option<i64>,
}

impl VerificationsState {
    /// Switch regional; returns `true` when a reload is needed. Rows of the
    /// previous regional are cleared right away.
    pub fn select_regional(&mut self, regional_id: Option<i64>) -> bool {
        if self.regional_id == regional_id {
            return false;
        }
        self.regional_id = regional_id;
        self.filter.inventory_id = None;
        self.list.clear();
        regional_id.is_some()
    }

    /// Start a load for the selected regional; `None` without a regional or
    /// while a load is in flight (the reload is then queued).
    pub fn begin_load(&mut self) -> Option<i64> {
        let regional_id = self.regional_id?;
        self.list.begin_load().then_some(regional_id)
    }

    /// Apply the outcome of a load issued for `regional_id`. A response for
    /// a regional that is no longer selected is discarded. Returns whether
    /// the page must load again.
    pub fn finish_load(
        &mut self,
        regional_id: i64,
        result: Result<Vec<Verification>, String>,
        today: NaiveDate,
    ) -> bool {
        if self.regional_id != Some(regional_id) {
            self.list.discard_load();
            self.list.take_reload_request();
            return self.regional_id.is_some();
        }
        match result {
            Ok(rows) => {
                self.list.finish_load(rows);
                self.refresh(today);
            }
            Err(message) => self.list.fail_load(message),
        }
        self.list.take_reload_request()
    }

    pub fn refresh(&mut self, today: NaiveDate) {
        self.list.apply_filter(&self.filter, today);
    }

    /// Distinct inventories seen in the loaded rows, sorted by name.
    pub fn inventory_options(&self) -> Vec<(i64, String)> {
        let mut options: Vec<(i64, String)> = Vec::new();
        for v in &self.list.items {
            if options.iter().all(|(id, _)| *id != v.inventory_id) {
                let name = v.inventory_name.clone().unwrap_or_else(|| format!("Inventario {}", v.inventory_id));
                options.push((v.inventory_id, name));
            }
        }
        options.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        options
    }

    pub fn stats(&self) -> Vec<Stat> {
        let count = |status: VerificationStatus| self.list.count_where(|v| v.status == status);
        vec![
            Stat::new("Total", self.list.items.len(), "total"),
            Stat::new("Pendientes", count(VerificationStatus::Pending), "pending"),
            Stat::new("Verificados", count(VerificationStatus::Verified), "success"),
            Stat::new("No encontrados", count(VerificationStatus::Missing), "danger"),
        ]
    }
}
