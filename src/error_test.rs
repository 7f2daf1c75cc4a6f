use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn from_status_maps_auth_codes() {
    assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403, "{}"), ApiError::Forbidden);
    assert!(ApiError::from_status(401, "").is_auth_failure());
    assert!(ApiError::from_status(403, "").is_auth_failure());
}

#[test]
fn from_status_maps_not_found() {
    let err = ApiError::from_status(404, r#"{"message":"Item no existe"}"#);
    assert!(err.is_not_found());
    assert!(!err.is_auth_failure());
}

#[test]
fn from_status_uses_body_message() {
    let err = ApiError::from_status(400, r#"{"message":"La placa ya existe"}"#);
    assert_eq!(err.to_string(), "La placa ya existe");
}

#[test]
fn from_status_falls_back_to_generic_message() {
    let err = ApiError::from_status(500, "<html>boom</html>");
    assert_eq!(err.to_string(), "Error del servidor (500)");
}

// =============================================================
// Body message extraction
// =============================================================

#[test]
fn extract_prefers_message_then_error_then_detail() {
    assert_eq!(
        extract_error_message(r#"{"error":"Bad Request","message":"Campo requerido"}"#).as_deref(),
        Some("Campo requerido")
    );
    assert_eq!(extract_error_message(r#"{"error":"Conflict"}"#).as_deref(), Some("Conflict"));
    assert_eq!(extract_error_message(r#"{"detail":"x"}"#).as_deref(), Some("x"));
}

#[test]
fn extract_skips_blank_fields() {
    assert_eq!(
        extract_error_message(r#"{"message":"  ","error":"Forbidden"}"#).as_deref(),
        Some("Forbidden")
    );
}

#[test]
fn extract_accepts_short_plain_text() {
    assert_eq!(extract_error_message("Usuario inactivo").as_deref(), Some("Usuario inactivo"));
    assert_eq!(extract_error_message("   "), None);
    assert_eq!(extract_error_message("[1,2]"), None);
}

#[test]
fn validation_error_displays_message_verbatim() {
    let err = ApiError::validation("Seleccione un responsable");
    assert_eq!(err.to_string(), "Seleccione un responsable");
}
