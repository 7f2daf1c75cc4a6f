use super::*;
use crate::net::types::Regional;

#[test]
fn encode_component_escapes_reserved_characters() {
    assert_eq!(encode_component("SENA-001"), "SENA-001");
    assert_eq!(encode_component("A/B 12"), "A%2FB%2012");
    assert_eq!(encode_component("ñ"), "%C3%B1");
}

#[test]
fn with_query_skips_empty_pairs() {
    assert_eq!(with_query("/users", &[]), "/users");
}

#[test]
fn with_query_joins_and_escapes_values() {
    let path = with_query("/users", &[("page", "2".to_owned()), ("q", "ana maría".to_owned())]);
    assert_eq!(path, "/users?page=2&q=ana%20mar%C3%ADa");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn decode_body_treats_empty_as_null() {
    let value: Option<Regional> = decode_body("  ").unwrap();
    assert!(value.is_none());
}

#[test]
fn decode_body_reports_shape_mismatch() {
    let err = decode_body::<Regional>(r#"{"id":"x"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn client_exposes_config() {
    let client = ApiClient::new(AppConfig::default());
    assert_eq!(client.config().url("regional"), "/api/v1/regional");
}
