//! Generic list-page state: loaded items, filtered view and pagination.
//!
//! DESIGN
//! ======
//! Every resource page (cancellations, inventories, loans, users,
//! verifications) wraps one `ListPage<T>` plus a resource-specific filter
//! implementing `ListFilter<T>`. The page drives it as
//! `begin_load -> finish_load|fail_load -> apply_filter`, and renders
//! `page_items()`. A load requested while another is in flight is queued,
//! not dropped: the page re-issues it once `take_reload_request` says so.
//!
//! ERROR HANDLING
//! ==============
//! A failed load leaves empty lists and the error message; it never keeps
//! stale rows around under an error banner.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use chrono::NaiveDate;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::util::pagination::Pagination;

/// Predicate set applied to one resource's loaded rows.
pub trait ListFilter<T> {
    fn matches(&self, item: &T, today: NaiveDate) -> bool;
}

/// A statistics card value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: usize,
    /// CSS modifier (`stat-card--{tone}`).
    pub tone: &'static str,
}

impl Stat {
    pub fn new(label: &'static str, value: usize, tone: &'static str) -> Self {
        Self { label, value, tone }
    }
}

#[derive(Clone, Debug)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub filtered: Vec<T>,
    pub pagination: Pagination,
    pub loading: bool,
    pub error: Option<String>,
    reload_requested: bool,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> ListPage<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            pagination: Pagination::new(page_size),
            loading: false,
            error: None,
            reload_requested: false,
        }
    }

    /// Mark a load in flight; returns `false` when one already is, and
    /// queues a reload for when it settles.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            self.reload_requested = true;
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Store freshly loaded rows. Callers re-apply their filter afterwards.
    pub fn finish_load(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Drop all rows and record why.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.items.clear();
        self.filtered.clear();
        self.pagination.reset(0);
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Settle an in-flight load whose response no longer matches the page
    /// scope. Rows are left untouched.
    pub fn discard_load(&mut self) {
        self.loading = false;
    }

    /// Whether a load was requested while the last one was in flight.
    /// Clears the request.
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// Empty every row without touching the in-flight flag.
    pub fn clear(&mut self) {
        self.items.clear();
        self.filtered.clear();
        self.pagination.reset(0);
        self.error = None;
    }

    pub fn page_items(&self) -> &[T] {
        self.pagination.slice(&self.filtered)
    }

    /// Jump to page `page`; out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pagination.go_to(page)
    }

    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.items.iter().filter(|item| pred(item)).count()
    }
}

impl<T: Clone> ListPage<T> {
    /// Rebuild `filtered` from `items` and return to the first page.
    pub fn apply_filter<F: ListFilter<T> + ?Sized>(&mut self, filter: &F, today: NaiveDate) {
        self.filtered = self
            .items
            .iter()
            .filter(|item| filter.matches(item, today))
            .cloned()
            .collect();
        self.pagination.reset(self.filtered.len());
    }
}
