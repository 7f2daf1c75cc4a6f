//! Cancellation (baja) requests page state.
//!
//! SYSTEM CONTEXT
//! ==============
//! A request lists items to decommission plus a reason. Reviewers approve or
//! refuse it (refusal needs a comment), and the requester attaches the
//! signed format and an example document.

#[cfg(test)]
#[path = "cancellations_test.rs"]
mod cancellations_test;

use chrono::NaiveDate;

use super::list::{ListFilter, ListPage, Stat};
use crate::error::ApiError;
use crate::net::api::FormatDocument;
use crate::net::types::{Cancellation, CancellationStatus, CreateCancellation, ItemRef};
use crate::util::date_range::DateRange;
use crate::util::search::SearchTerm;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CancellationFilter {
    pub status: Option<CancellationStatus>,
    pub search: SearchTerm,
    pub date_range: DateRange,
}

impl ListFilter<Cancellation> for CancellationFilter {
    fn matches(&self, c: &Cancellation, today: NaiveDate) -> bool {
        if self.status.is_some_and(|s| s != c.status()) {
            return false;
        }
        if !self.date_range.contains(c.requested_at.date(), today) {
            return false;
        }
        let item_text = c
            .items
            .iter()
            .flat_map(|i| [Some(i.product_name.as_str()), i.licence_plate_number.as_deref()])
            .flatten();
        self.search
            .matches([c.requester.full_name.as_str(), c.reason.as_str()].into_iter().chain(item_text))
    }
}

/// Action a cancellation modal was opened for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancellationAction {
    Approve(i64),
    Refuse(i64),
    Upload(i64, FormatDocument),
}

impl CancellationAction {
    pub fn id(self) -> i64 {
        match self {
            Self::Approve(id) | Self::Refuse(id) | Self::Upload(id, _) => id,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Approve(_) => "Aprobar solicitud de baja",
            Self::Refuse(_) => "Rechazar solicitud de baja",
            Self::Upload(_, FormatDocument::Format) => "Subir formato de baja",
            Self::Upload(_, FormatDocument::Example) => "Subir ejemplo del formato",
        }
    }
}

/// Items and reason collected by the create-request modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CancellationDraft {
    pub items: Vec<ItemRef>,
    pub reason: String,
}

impl CancellationDraft {
    /// Add an item; an item already in the draft is rejected.
    ///
    /// # Errors
    ///
    /// `ApiError::Validation` when the item was already added.
    pub fn add_item(&mut self, item: ItemRef) -> Result<(), ApiError> {
        if self.items.iter().any(|i| i.id == item.id) {
            return Err(ApiError::validation(format!("{} ya está en la solicitud", item.display())));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove_item(&mut self, id: i64) {
        self.items.retain(|i| i.id != id);
    }

    /// # Errors
    ///
    /// `ApiError::Validation` for an empty item list or blank reason.
    pub fn to_payload(&self) -> Result<CreateCancellation, ApiError> {
        if self.items.is_empty() {
            return Err(ApiError::validation("Agregue al menos un bien a la solicitud"));
        }
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(ApiError::validation("Indique el motivo de la baja"));
        }
        Ok(CreateCancellation { item_ids: self.items.iter().map(|i| i.id).collect(), reason: reason.to_owned() })
    }
}

#[derive(Clone, Debug, Default)]
pub struct CancellationsState {
    pub list: ListPage<Cancellation>,
    pub filter: CancellationFilter,
}

impl CancellationsState {
    pub fn refresh(&mut self, today: NaiveDate) {
        self.list.apply_filter(&self.filter, today);
    }

    pub fn stats(&self) -> Vec<Stat> {
        let count = |status: CancellationStatus| self.list.count_where(|c| c.status() == status);
        vec![
            Stat::new("Total", self.list.items.len(), "total"),
            Stat::new("Pendientes", count(CancellationStatus::Pending), "pending"),
            Stat::new("Aprobadas", count(CancellationStatus::Approved), "success"),
            Stat::new("Rechazadas", count(CancellationStatus::Refused), "danger"),
        ]
    }
}
