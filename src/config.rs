//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is served as static files next to the SGDIS backend, so there is
//! no runtime config endpoint. Deploy-specific values come from environment
//! variables captured by `option_env!` when the WASM bundle is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Default REST prefix when `SGDIS_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "/api/v1";
/// Default login route when `SGDIS_LOGIN_URL` is not set at build time.
pub const DEFAULT_LOGIN_URL: &str = "/login";
/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "jwt";
/// Rows per page in every list view.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Two lends closer than this are treated as a double submission.
pub const DUPLICATE_LOAN_WINDOW: Duration = Duration::from_secs(5);

/// Settings shared by every page through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub login_url: String,
    pub token_key: String,
    pub page_size: usize,
    pub duplicate_loan_window: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            login_url: DEFAULT_LOGIN_URL.to_owned(),
            token_key: TOKEN_STORAGE_KEY.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            duplicate_loan_window: DUPLICATE_LOAN_WINDOW,
        }
    }
}

impl AppConfig {
    /// Build the config from values captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SGDIS_API_BASE"), option_env!("SGDIS_LOGIN_URL"))
    }

    fn from_values(api_base: Option<&str>, login_url: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(normalize_base)
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.api_base),
            login_url: login_url
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map_or(defaults.login_url, str::to_owned),
            ..defaults
        }
    }

    /// Join a relative path onto the API base.
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.api_base)
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
