//! Client-side pagination over an already-filtered list.
//!
//! DESIGN
//! ======
//! Pages are zero-based internally and rendered one-based. Out-of-range page
//! requests are ignored rather than clamped so a stale click never moves the
//! user somewhere unexpected.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Pages shown on each side of the current one before collapsing to a gap.
const WINDOW: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

/// One slot in the rendered page-number list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self { page: 0, page_size: page_size.max(1), total: 0 }
    }

    /// Number of pages; an empty list still has zero pages.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Record a new list length and return to the first page.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.page = 0;
    }

    /// Jump to `page`; returns `false` and does nothing when out of range.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page >= self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    pub fn prev(&mut self) -> bool {
        self.has_prev() && self.go_to(self.page - 1)
    }

    pub fn next(&mut self) -> bool {
        self.has_next() && self.go_to(self.page + 1)
    }

    /// `[page * size, (page + 1) * size)`, clipped to the list length.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// First page, last page and a window around the current page, with
    /// collapsed runs shown as `Gap`.
    pub fn links(&self) -> Vec<PageLink> {
        let total = self.total_pages();
        let mut links = Vec::new();
        let mut last_shown: Option<usize> = None;
        for p in 0..total {
            let near = p.abs_diff(self.page) <= WINDOW;
            if p == 0 || p + 1 == total || near {
                if let Some(prev) = last_shown {
                    if p > prev + 1 {
                        links.push(PageLink::Gap);
                    }
                }
                links.push(PageLink::Page(p));
                last_shown = Some(p);
            }
        }
        links
    }

    /// "Mostrando 11-20 de 42" style summary.
    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "Sin resultados".to_owned();
        }
        let range = self.range();
        format!("Mostrando {}-{} de {}", range.start + 1, range.end, self.total)
    }
}
