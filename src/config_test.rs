use super::*;

#[test]
fn default_config_uses_v1_prefix_and_five_second_window() {
    let config = AppConfig::default();
    assert_eq!(config.api_base, "/api/v1");
    assert_eq!(config.token_key, "jwt");
    assert_eq!(config.page_size, 10);
    assert_eq!(config.duplicate_loan_window, Duration::from_secs(5));
}

#[test]
fn from_values_strips_trailing_slash_from_base() {
    let config = AppConfig::from_values(Some("https://sgdis.example.co/api/v1/ "), None);
    assert_eq!(config.api_base, "https://sgdis.example.co/api/v1");
    assert_eq!(config.login_url, "/login");
}

#[test]
fn from_values_ignores_blank_overrides() {
    let config = AppConfig::from_values(Some("   "), Some(""));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn url_joins_with_single_slash() {
    let config = AppConfig::default();
    assert_eq!(config.url("/users/me"), "/api/v1/users/me");
    assert_eq!(config.url("regional"), "/api/v1/regional");
}
