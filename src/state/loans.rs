//! Loans page state: item loans, lend/return forms.

#[cfg(test)]
#[path = "loans_test.rs"]
mod loans_test;

use chrono::NaiveDate;

use super::list::{ListFilter, ListPage, Stat};
use crate::error::ApiError;
use crate::net::types::{LendRequest, Loan, LoanQuery, ReturnRequest};
use crate::util::date_range::DateRange;
use crate::util::search::SearchTerm;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoanStatusFilter {
    #[default]
    All,
    Active,
    Returned,
}

impl LoanStatusFilter {
    pub fn code(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Returned => "returned",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "active" => Self::Active,
            "returned" => Self::Returned,
            _ => Self::All,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoanFilter {
    pub status: LoanStatusFilter,
    pub search: SearchTerm,
    pub date_range: DateRange,
    pub item_id: Option<i64>,
}

impl ListFilter<Loan> for LoanFilter {
    fn matches(&self, loan: &Loan, today: NaiveDate) -> bool {
        let status_ok = match self.status {
            LoanStatusFilter::All => true,
            LoanStatusFilter::Active => !loan.returned,
            LoanStatusFilter::Returned => loan.returned,
        };
        if !status_ok || self.item_id.is_some_and(|id| id != loan.item.id) {
            return false;
        }
        if !self.date_range.contains(loan.lend_at.date(), today) {
            return false;
        }
        self.search.matches(
            [
                Some(loan.item.product_name.as_str()),
                loan.item.licence_plate_number.as_deref(),
                Some(loan.responsible.full_name.as_str()),
                loan.lender.as_ref().map(|l| l.full_name.as_str()),
                loan.details_lend.as_deref(),
            ]
            .into_iter()
            .flatten(),
        )
    }
}

/// Input of the lend modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LendForm {
    pub responsible_id: Option<i64>,
    pub details: String,
}

impl LendForm {
    /// # Errors
    ///
    /// `ApiError::Validation` when no item or responsible user is chosen.
    pub fn to_request(&self, item_id: Option<i64>) -> Result<LendRequest, ApiError> {
        let item_id = item_id.ok_or_else(|| ApiError::validation("Seleccione el bien a prestar"))?;
        let responsible_id = self
            .responsible_id
            .ok_or_else(|| ApiError::validation("Seleccione el responsable del préstamo"))?;
        Ok(LendRequest { item_id, responsible_id, details: self.details.trim().to_owned() })
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoansState {
    pub list: ListPage<Loan>,
    pub filter: LoanFilter,
}

impl LoansState {
    pub fn refresh(&mut self, today: NaiveDate) {
        self.list.apply_filter(&self.filter, today);
    }

    /// Backend query for the selected item, or every loan without one.
    pub fn query(&self) -> LoanQuery {
        self.filter.item_id.map(LoanQuery::for_item).unwrap_or_default()
    }

    /// Start a load; `None` while one is in flight (the reload is queued).
    pub fn begin_load(&mut self) -> Option<LoanQuery> {
        self.list.begin_load().then(|| self.query())
    }

    /// Apply the outcome of a load issued for `query`. A response for an
    /// item that is no longer selected is discarded. Returns whether the
    /// page must load again.
    pub fn finish_load(&mut self, query: &LoanQuery, result: Result<Vec<Loan>, String>, today: NaiveDate) -> bool {
        if *query != self.query() {
            self.list.discard_load();
            self.list.take_reload_request();
            return true;
        }
        match result {
            Ok(loans) => {
                self.list.finish_load(loans);
                self.refresh(today);
            }
            Err(message) => self.list.fail_load(message),
        }
        self.list.take_reload_request()
    }

    /// An item can only be lent while it has no open loan.
    pub fn has_open_loan(&self, item_id: i64) -> bool {
        self.list.items.iter().any(|l| l.item.id == item_id && !l.returned)
    }

    pub fn return_request(loan_id: i64, details: &str) -> ReturnRequest {
        ReturnRequest { loan_id, details: details.trim().to_owned() }
    }

    pub fn stats(&self) -> Vec<Stat> {
        let active = self.list.count_where(|l| !l.returned);
        vec![
            Stat::new("Total", self.list.items.len(), "total"),
            Stat::new("Activos", active, "pending"),
            Stat::new("Devueltos", self.list.items.len() - active, "success"),
        ]
    }
}
