//! Inventories page state with role tabs for the signed-in user.

#[cfg(test)]
#[path = "inventories_test.rs"]
mod inventories_test;

use chrono::NaiveDate;

use super::list::{ListFilter, ListPage, Stat};
use crate::net::types::{Inventory, InventoryRole};
use crate::util::search::SearchTerm;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryFilter {
    /// Signed-in user; role tabs match nothing without it.
    pub user_id: Option<i64>,
    pub role: Option<InventoryRole>,
    pub status: Option<bool>,
    pub search: SearchTerm,
}

impl ListFilter<Inventory> for InventoryFilter {
    fn matches(&self, inv: &Inventory, _today: NaiveDate) -> bool {
        if let Some(role) = self.role {
            let Some(user_id) = self.user_id else {
                return false;
            };
            if !inv.has_role(user_id, role) {
                return false;
            }
        }
        if self.status.is_some_and(|s| s != inv.status) {
            return false;
        }
        self.search.matches(
            [Some(inv.name.as_str()), inv.location.as_deref(), inv.uuid.as_deref(), Some(inv.owner_name())]
                .into_iter()
                .flatten(),
        )
    }
}

/// Target of the role modals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryAction {
    Assign(i64, InventoryRole),
    Quit(i64, InventoryRole),
}

impl InventoryAction {
    pub fn inventory_id(self) -> i64 {
        match self {
            Self::Assign(id, _) | Self::Quit(id, _) => id,
        }
    }

    pub fn role(self) -> InventoryRole {
        match self {
            Self::Assign(_, role) | Self::Quit(_, role) => role,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InventoriesState {
    pub list: ListPage<Inventory>,
    pub filter: InventoryFilter,
}

impl InventoriesState {
    pub fn refresh(&mut self, today: NaiveDate) {
        self.list.apply_filter(&self.filter, today);
    }

    /// Roles the user may give up on `inv` (never ownership).
    pub fn quittable_roles(inv: &Inventory, user_id: i64) -> Vec<InventoryRole> {
        inv.roles_of(user_id).into_iter().filter(|r| r.can_quit()).collect()
    }

    pub fn stats(&self) -> Vec<Stat> {
        let Some(user_id) = self.filter.user_id else {
            return vec![Stat::new("Total", self.list.items.len(), "total")];
        };
        let count = |role: InventoryRole| self.list.count_where(|inv| inv.has_role(user_id, role));
        vec![
            Stat::new("Total", self.list.items.len(), "total"),
            Stat::new("Propios", count(InventoryRole::Owner), "primary"),
            Stat::new("Como manejador", count(InventoryRole::Manager), "info"),
            Stat::new("Como firmante", count(InventoryRole::Signatory), "pending"),
        ]
    }
}
