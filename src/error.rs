//! Error taxonomy for backend calls and form validation.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is non-fatal to the page. Callers log the error, hand its
//! `Display` text to the notifier and leave their state empty but consistent.
//! Only `Unauthorized`/`Forbidden` trigger a side effect (token cleared and
//! redirect to login).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Generic message when the backend body carries no usable text.
const GENERIC_STATUS_MESSAGE: &str = "Error del servidor";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Error de conexión: {0}")]
    Network(String),
    #[error("Sesión expirada. Inicie sesión nuevamente.")]
    Unauthorized,
    #[error("No tiene permisos para realizar esta acción.")]
    Forbidden,
    #[error("Recurso no encontrado.")]
    NotFound,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Classify a non-OK HTTP status, using the response body when it
    /// carries a readable message.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            _ => Self::Status {
                status,
                message: extract_error_message(body)
                    .unwrap_or_else(|| format!("{GENERIC_STATUS_MESSAGE} ({status})")),
            },
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the stored token must be cleared and the user sent to login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Pull a human-readable message out of a JSON error body.
///
/// Spring error bodies use `message`; some handlers use `error` or `detail`.
/// Plain-text bodies are returned as-is when short enough to show in a toast.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => ["message", "error", "detail"]
            .iter()
            .filter_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_owned),
        Ok(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Ok(_) => None,
        Err(_) if trimmed.len() <= 200 && !trimmed.starts_with('<') => Some(trimmed.to_owned()),
        Err(_) => None,
    }
}
