//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated once from `/users/me` at startup. Pages read it to decide which
//! actions to offer (approving cancellations, managing users) and to scope
//! role-based inventory filters to the signed-in user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Users page and user mutations.
    pub fn can_manage_users(&self) -> bool {
        matches!(self.role(), Some(Role::Superadmin | Role::AdminRegional | Role::AdminInstitution))
    }

    /// Approve or refuse cancellation requests.
    pub fn can_decide_cancellations(&self) -> bool {
        matches!(
            self.role(),
            Some(Role::Superadmin | Role::AdminRegional | Role::AdminInstitution | Role::Warehouse)
        )
    }

    /// Show the "redirecting" placeholder once loading finished with no user.
    pub fn should_redirect(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}
