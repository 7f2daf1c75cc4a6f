//! Users page state and the create/edit form.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use chrono::NaiveDate;

use super::list::{ListFilter, ListPage, Stat};
use crate::error::ApiError;
use crate::net::types::{Role, User, UserPayload};
use crate::util::search::SearchTerm;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub status: Option<bool>,
    pub search: SearchTerm,
}

impl ListFilter<User> for UserFilter {
    fn matches(&self, user: &User, _today: NaiveDate) -> bool {
        if self.role.is_some_and(|r| r != user.role) || self.status.is_some_and(|s| s != user.status) {
            return false;
        }
        self.search.matches(
            [
                Some(user.full_name.as_str()),
                Some(user.email.as_str()),
                user.job_title.as_deref(),
                user.institution_name.as_deref(),
            ]
            .into_iter()
            .flatten(),
        )
    }
}

/// Fields of the create/edit modal; `id` is set when editing.
#[derive(Clone, Debug, PartialEq)]
pub struct UserForm {
    pub id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub job_title: String,
    pub role: Option<Role>,
    pub status: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self { id: None, full_name: String::new(), email: String::new(), job_title: String::new(), role: None, status: true }
    }
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            job_title: user.job_title.clone().unwrap_or_default(),
            role: Some(user.role).filter(|r| *r != Role::Unknown),
            status: user.status,
        }
    }

    /// # Errors
    ///
    /// `ApiError::Validation` for a blank name, malformed email or missing role.
    pub fn to_payload(&self) -> Result<UserPayload, ApiError> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(ApiError::validation("Ingrese el nombre completo"));
        }
        let email = self.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(ApiError::validation("Ingrese un correo electrónico válido"));
        }
        let role = self.role.ok_or_else(|| ApiError::validation("Seleccione un rol"))?;
        let job_title = self.job_title.trim();
        Ok(UserPayload {
            full_name: full_name.to_owned(),
            email,
            job_title: (!job_title.is_empty()).then(|| job_title.to_owned()),
            role,
            status: self.status,
        })
    }
}

/// `local@domain.tld` with no spaces and a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub list: ListPage<User>,
    pub filter: UserFilter,
}

impl UsersState {
    pub fn refresh(&mut self, today: NaiveDate) {
        self.list.apply_filter(&self.filter, today);
    }

    pub fn stats(&self) -> Vec<Stat> {
        let active = self.list.count_where(|u| u.status);
        vec![
            Stat::new("Total", self.list.items.len(), "total"),
            Stat::new("Activos", active, "success"),
            Stat::new("Inactivos", self.list.items.len() - active, "danger"),
        ]
    }
}
