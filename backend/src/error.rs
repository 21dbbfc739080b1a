//! Errors the gateway itself raises, as opposed to error responses it relays
//! from the loyalty API. Both reach the browser as `{"detail": "..."}` so the
//! dashboard reads them the same way.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    BadRequest(String),

    #[error("El archivo excede el límite de {limit_mb} MB")]
    PayloadTooLarge { limit_mb: usize },

    #[error("No se pudo conectar con la API de lealtad")]
    Unreachable(#[source] reqwest::Error),

    #[error("Respuesta inválida de la API de lealtad: {0}")]
    Decode(String),

    #[error("Error leyendo el archivo: {0}")]
    Multipart(String),
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) | GatewayError::Multipart(_) => StatusCode::BAD_REQUEST,
            GatewayError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::Unreachable(source) if source.is_timeout() => {
                StatusCode::GATEWAY_TIMEOUT
            }
            GatewayError::Unreachable(_) | GatewayError::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn renders_detail_body() {
        let err = GatewayError::BadRequest("limit debe estar entre 1 y 100".to_string());
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["detail"], "limit debe estar entre 1 y 100");
    }

    #[test]
    fn statuses_by_kind() {
        assert_eq!(
            GatewayError::PayloadTooLarge { limit_mb: 20 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            GatewayError::Decode("unknown variant".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GatewayError::PayloadTooLarge { limit_mb: 20 }.to_string(),
            "El archivo excede el límite de 20 MB"
        );
    }
}
