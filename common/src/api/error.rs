//! Error taxonomy for calls to the loyalty API.
//!
//! Every failure a view can hit falls into one of four buckets: the request
//! never completed, the backend answered 404, it answered any other
//! non-success status, or a success body did not match the expected record.
//! Error bodies are decoded tolerantly: a JSON object with a string `detail`
//! contributes its message, anything else is ignored.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request did not complete (DNS, connection refused, CORS, timeout).
    #[error("{0}")]
    Transport(String),

    /// HTTP 404.
    #[error("{}", not_found_message(.detail))]
    NotFound { detail: Option<String> },

    /// Any other non-success status.
    #[error("{}", status_message(.status, .detail))]
    Status {
        status: u16,
        reason: Option<String>,
        detail: Option<String>,
    },

    /// A success body could not be decoded into the expected record.
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

fn not_found_message(detail: &Option<String>) -> String {
    detail.clone().unwrap_or_else(|| "No encontrado".to_string())
}

fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("Error {}", status),
    }
}

/// Extracts `detail` from a FastAPI-style error body.
///
/// Validation errors carry a list under `detail`; those are not user-facing
/// text and yield `None`, as does any non-JSON body.
pub fn extract_detail(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body).ok()? {
        Value::Object(map) => match map.get("detail") {
            Some(Value::String(detail)) if !detail.trim().is_empty() => Some(detail.clone()),
            _ => None,
        },
        _ => None,
    }
}

impl ApiError {
    /// Builds the error for a non-success response.
    pub fn from_response(status: u16, reason: &str, body: &str) -> Self {
        let detail = extract_detail(body);
        if status == 404 {
            return ApiError::NotFound { detail };
        }
        let reason = Some(reason.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        ApiError::Status {
            status,
            reason,
            detail,
        }
    }

    /// HTTP status when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { detail } | ApiError::Status { detail, .. } => detail.as_deref(),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// Message for list views, which only report the status code.
    pub fn list_message(&self) -> String {
        match self.status() {
            Some(status) => format!("Error {}", status),
            None => self.to_string(),
        }
    }

    /// Message for the upload view: backend detail, else status and reason.
    pub fn upload_message(&self) -> String {
        if let Some(detail) = self.detail() {
            return detail.to_string();
        }
        match self {
            ApiError::Status {
                status,
                reason: Some(reason),
                ..
            } => format!("Error {}: {}", status, reason),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_detail() {
        let err = ApiError::from_response(
            404,
            "Not Found",
            r#"{"detail": "Usuario con cédula V-1 no encontrado"}"#,
        );
        assert_eq!(
            err,
            ApiError::NotFound {
                detail: Some("Usuario con cédula V-1 no encontrado".to_string())
            }
        );
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn unparsable_body_falls_back_to_status() {
        let err = ApiError::from_response(500, "Internal Server Error", "<html>boom</html>");
        assert_eq!(err.detail(), None);
        assert_eq!(err.to_string(), "Error 500");
        assert_eq!(err.upload_message(), "Error 500: Internal Server Error");
    }

    #[test]
    fn validation_list_detail_is_ignored() {
        let body = r#"{"detail": [{"loc": ["query", "limit"], "msg": "too big"}]}"#;
        assert_eq!(extract_detail(body), None);
        assert_eq!(extract_detail(r#"{"detail": "  "}"#), None);
        assert_eq!(extract_detail("[]"), None);
    }

    #[test]
    fn string_detail_wins_everywhere() {
        let err = ApiError::from_response(400, "Bad Request", r#"{"detail": "Archivo vacío"}"#);
        assert_eq!(err.to_string(), "Archivo vacío");
        assert_eq!(err.upload_message(), "Archivo vacío");
        assert_eq!(err.list_message(), "Error 400");
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = ApiError::Transport("Failed to fetch".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.list_message(), "Failed to fetch");
    }
}
