//! Cascading Regional -> Institution -> Inventory -> Item selection.
//!
//! DESIGN
//! ======
//! Selecting a level clears every level below it and returns the fetch the
//! caller must issue next. Fetch results are tagged with the parent id they
//! were requested for and dropped if the user has since picked another
//! parent, so a slow response cannot repopulate a stale list.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use crate::net::types::{Institution, Inventory, Item, Regional};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CascadeLevel {
    Regional,
    Institution,
    Inventory,
    Item,
}

/// Follow-up request after a selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CascadeFetch {
    Institutions(i64),
    Inventories(i64),
    Items(i64),
}

#[derive(Clone, Debug, Default)]
pub struct CascadeState {
    pub regionals: Vec<Regional>,
    pub institutions: Vec<Institution>,
    pub inventories: Vec<Inventory>,
    pub items: Vec<Item>,
    pub regional_id: Option<i64>,
    pub institution_id: Option<i64>,
    pub inventory_id: Option<i64>,
    pub item_id: Option<i64>,
    /// Level whose options are being fetched.
    pub loading: Option<CascadeLevel>,
}

impl CascadeState {
    pub fn set_regionals(&mut self, regionals: Vec<Regional>) {
        self.regionals = regionals;
        if self.regional_id.is_some_and(|id| !self.regionals.iter().any(|r| r.id == id)) {
            self.select_regional(None);
        }
    }

    pub fn select_regional(&mut self, id: Option<i64>) -> Option<CascadeFetch> {
        self.regional_id = id;
        self.clear_below(CascadeLevel::Regional);
        id.map(|id| {
            self.loading = Some(CascadeLevel::Institution);
            CascadeFetch::Institutions(id)
        })
    }

    pub fn select_institution(&mut self, id: Option<i64>) -> Option<CascadeFetch> {
        self.institution_id = id;
        self.clear_below(CascadeLevel::Institution);
        id.map(|id| {
            self.loading = Some(CascadeLevel::Inventory);
            CascadeFetch::Inventories(id)
        })
    }

    pub fn select_inventory(&mut self, id: Option<i64>) -> Option<CascadeFetch> {
        self.inventory_id = id;
        self.clear_below(CascadeLevel::Inventory);
        id.map(|id| {
            self.loading = Some(CascadeLevel::Item);
            CascadeFetch::Items(id)
        })
    }

    pub fn select_item(&mut self, id: Option<i64>) {
        self.item_id = id.filter(|id| self.items.iter().any(|i| i.id == *id));
    }

    /// Accept institutions fetched for `regional_id`; `false` if stale.
    pub fn accept_institutions(&mut self, regional_id: i64, institutions: Vec<Institution>) -> bool {
        if self.regional_id != Some(regional_id) {
            return false;
        }
        self.institutions = institutions;
        self.loading = None;
        true
    }

    /// Accept inventories fetched for `institution_id`; `false` if stale.
    pub fn accept_inventories(&mut self, institution_id: i64, inventories: Vec<Inventory>) -> bool {
        if self.institution_id != Some(institution_id) {
            return false;
        }
        self.inventories = inventories;
        self.loading = None;
        true
    }

    /// Accept items fetched for `inventory_id`; `false` if stale.
    pub fn accept_items(&mut self, inventory_id: i64, items: Vec<Item>) -> bool {
        if self.inventory_id != Some(inventory_id) {
            return false;
        }
        self.items = items;
        self.loading = None;
        true
    }

    /// Record a failed fetch for `level` so its spinner stops.
    pub fn fetch_failed(&mut self, level: CascadeLevel) {
        if self.loading == Some(level) {
            self.loading = None;
        }
    }

    /// A level is selectable once its parent is chosen.
    pub fn is_enabled(&self, level: CascadeLevel) -> bool {
        match level {
            CascadeLevel::Regional => true,
            CascadeLevel::Institution => self.regional_id.is_some(),
            CascadeLevel::Inventory => self.institution_id.is_some(),
            CascadeLevel::Item => self.inventory_id.is_some(),
        }
    }

    pub fn selected_inventory(&self) -> Option<&Inventory> {
        let id = self.inventory_id?;
        self.inventories.iter().find(|i| i.id == id)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        let id = self.item_id?;
        self.items.iter().find(|i| i.id == id)
    }

    fn clear_below(&mut self, level: CascadeLevel) {
        self.loading = None;
        if level == CascadeLevel::Regional {
            self.institution_id = None;
            self.institutions.clear();
        }
        if matches!(level, CascadeLevel::Regional | CascadeLevel::Institution) {
            self.inventory_id = None;
            self.inventories.clear();
        }
        if level != CascadeLevel::Item {
            self.item_id = None;
            self.items.clear();
        }
    }
}
