//! # Loyalty API client
//!
//! Forwards dashboard calls to the external loyalty API with `reqwest`.
//!
//! Each forwarded call gets a fresh `x-request-id` that is sent upstream and
//! written to the log next to the method, URL and resulting status. When the
//! primary base URL cannot be reached, or answers with a 5xx, and a fallback
//! base URL is configured, the same request is sent once more to the fallback
//! and its answer is returned, whatever it is.

use crate::config::Config;
use crate::error::GatewayError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use actix_web::web::Bytes;
use common::api::Endpoints;
use log::{error, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone)]
pub struct Upstream {
    client: Client,
    primary: String,
    fallback: Option<String>,
    paths: Endpoints,
}

/// Status and raw body of an upstream answer.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Upstream {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(
            client,
            &config.upstream_url,
            config.fallback_url.as_deref(),
        ))
    }

    pub fn with_client(client: Client, primary: &str, fallback: Option<&str>) -> Self {
        Self {
            client,
            primary: primary.trim_end_matches('/').to_string(),
            fallback: fallback.map(|url| url.trim_end_matches('/').to_string()),
            // Relative paths; the base is prefixed per attempt.
            paths: Endpoints::new(""),
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn paths(&self) -> &Endpoints {
        &self.paths
    }

    pub async fn get(&self, path: &str) -> Result<UpstreamReply, GatewayError> {
        self.forward("GET", path, |client, url| client.get(url)).await
    }

    /// Re-sends an uploaded file as the single multipart part `file`.
    pub async fn post_file(
        &self,
        path: &str,
        file_name: &str,
        data: Bytes,
    ) -> Result<UpstreamReply, GatewayError> {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        self.forward("POST", path, |client, url| {
            let form = Form::new().part("file", file_part(&data, file_name, mime.as_ref()));
            client.post(url).multipart(form)
        })
        .await
    }

    async fn forward<F>(
        &self,
        method: &str,
        path: &str,
        build: F,
    ) -> Result<UpstreamReply, GatewayError>
    where
        F: Fn(&Client, &str) -> RequestBuilder,
    {
        let request_id = Uuid::new_v4().to_string();
        let first = self
            .attempt(&build, &self.primary, method, path, &request_id)
            .await;

        let Some(fallback) = self.fallback.as_deref() else {
            return first;
        };
        let retry = match &first {
            Ok(reply) if reply.status < 500 => false,
            Ok(reply) => {
                warn!(
                    "[{}] {} answered {}, retrying against {}",
                    request_id, self.primary, reply.status, fallback
                );
                true
            }
            Err(e) => {
                warn!(
                    "[{}] {} unreachable ({}), retrying against {}",
                    request_id, self.primary, e, fallback
                );
                true
            }
        };
        if !retry {
            return first;
        }

        self.attempt(&build, fallback, method, path, &request_id)
            .await
    }

    async fn attempt<F>(
        &self,
        build: &F,
        base: &str,
        method: &str,
        path: &str,
        request_id: &str,
    ) -> Result<UpstreamReply, GatewayError>
    where
        F: Fn(&Client, &str) -> RequestBuilder,
    {
        let url = format!("{}{}", base, path);
        let response = build(&self.client, url.as_str())
            .header(REQUEST_ID_HEADER, request_id)
            .send()
            .await
            .map_err(|e| {
                error!("[{}] {} {} failed: {}", request_id, method, url, e);
                GatewayError::Unreachable(e)
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|e| {
            error!("[{}] {} {} body read failed: {}", request_id, method, url, e);
            GatewayError::Unreachable(e)
        })?;

        info!("[{}] {} {} -> {}", request_id, method, url, status);
        Ok(UpstreamReply {
            status,
            content_type,
            body,
        })
    }
}

fn file_part(data: &Bytes, file_name: &str, mime: &str) -> Part {
    let part = || Part::bytes(data.to_vec()).file_name(file_name.to_string());
    part().mime_str(mime).unwrap_or_else(|_| part())
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes a success body as `T` and re-serializes it; any other answer
    /// is relayed as is so its `detail` reaches the dashboard.
    pub fn into_typed<T>(self) -> Result<HttpResponse, GatewayError>
    where
        T: DeserializeOwned + Serialize,
    {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_GATEWAY);
        if !self.is_success() {
            return Ok(HttpResponse::build(status)
                .content_type(
                    self.content_type
                        .unwrap_or_else(|| "application/json".to_string()),
                )
                .body(self.body));
        }

        let record: T = serde_json::from_slice(&self.body).map_err(|e| {
            error!(
                "upstream body does not match {}: {}",
                std::any::type_name::<T>(),
                e
            );
            GatewayError::Decode(e.to_string())
        })?;
        Ok(HttpResponse::build(status).json(record))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-process stand-ins for the loyalty API.

    use super::Upstream;
    use actix_web::http::StatusCode;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use serde_json::json;

    pub const USER_ID: &str = "V-12345678";

    pub fn user_json() -> serde_json::Value {
        json!({
            "_id": "65f0c0ffee",
            "cedula": USER_ID,
            "nombre": "Juan Pérez",
            "telefono": "0414-5551234",
            "correo": "juan@example.com",
            "nivel": "GigaBytes",
            "total_gastado": 1820.5,
            "compras_totales": 9,
            "puntos_totales": 1820,
            "puntos_vigentes": 1650,
            "puntos_listos_canje": 1500,
            "dolares_canjeables": 30.0,
            "fecha_suscripcion": "2024-01-15T10:00:00",
            "ultima_actualizacion": "2024-06-01T08:30:00",
            "transacciones": []
        })
    }

    pub fn points_json() -> serde_json::Value {
        json!({
            "cedula": USER_ID,
            "nombre": "Juan Pérez",
            "nivel": "GigaBytes",
            "puntos_totales": 1820,
            "puntos_vigentes": 1650,
            "puntos_listos_canje": 1500,
            "dolares_canjeables": 30.0
        })
    }

    async fn loyalty_api(req: HttpRequest) -> HttpResponse {
        let path = req.path();
        let found_id = path.rsplit('/').next().unwrap_or_default();

        let body = match path {
            "/api/users/" => json!({ "total": 41, "users": [user_json()] }),
            "/api/users/listos-canje/" => json!({ "total": 7, "users": [points_json()] }),
            "/api/puntos/listos-canje" => json!({ "total": 7, "clientes": [points_json()] }),
            "/api/data/upload" => json!({
                "mensaje": "Archivo procesado",
                "registros_procesados": 120,
                "clientes_actualizados": 40,
                "usuarios_actualizados": 38,
                "errores": ["Fila 7: cédula vacía"]
            }),
            _ if found_id != USER_ID => {
                return HttpResponse::NotFound()
                    .json(json!({ "detail": format!("Cliente con cédula {} no encontrado", found_id) }))
            }
            p if p.starts_with("/api/users/puntos/") || p.starts_with("/api/puntos/cliente/") => {
                points_json()
            }
            _ => user_json(),
        };
        HttpResponse::Ok().json(body)
    }

    fn start(server: actix_web::dev::Server) {
        actix_web::rt::spawn(server);
    }

    /// A loyalty API that serves every route the gateway forwards.
    pub fn spawn_loyalty_api() -> String {
        let server = HttpServer::new(|| App::new().default_service(web::to(loyalty_api)))
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .unwrap();
        let url = format!("http://{}", server.addrs()[0]);
        start(server.run());
        url
    }

    /// A server answering every request with `status` and `body`.
    pub fn spawn_fixed(status: u16, body: &'static str) -> String {
        let server = HttpServer::new(move || {
            App::new().default_service(web::to(move || async move {
                HttpResponse::build(StatusCode::from_u16(status).unwrap())
                    .content_type("application/json")
                    .body(body)
            }))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();
        let url = format!("http://{}", server.addrs()[0]);
        start(server.run());
        url
    }

    /// Nothing listens here.
    pub const UNREACHABLE: &str = "http://127.0.0.1:9";

    pub fn upstream(primary: &str, fallback: Option<&str>) -> Upstream {
        Upstream::with_client(reqwest::Client::new(), primary, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[actix_web::test]
    async fn primary_answer_is_used_when_healthy() {
        let primary = spawn_loyalty_api();
        let upstream = upstream(&primary, Some(UNREACHABLE));
        let reply = upstream.get("/api/users/V-12345678").await.unwrap();
        assert_eq!(reply.status, 200);
    }

    #[actix_web::test]
    async fn server_error_falls_back_once() {
        let primary = spawn_fixed(503, r#"{"detail": "mantenimiento"}"#);
        let fallback = spawn_loyalty_api();
        let upstream = upstream(&primary, Some(&fallback));
        let reply = upstream.get("/api/users/V-12345678").await.unwrap();
        assert_eq!(reply.status, 200);
    }

    #[actix_web::test]
    async fn transport_failure_falls_back() {
        let fallback = spawn_loyalty_api();
        let upstream = upstream(UNREACHABLE, Some(&fallback));
        let reply = upstream.get("/api/users/V-12345678").await.unwrap();
        assert_eq!(reply.status, 200);
    }

    #[actix_web::test]
    async fn client_errors_do_not_fall_back() {
        let primary = spawn_fixed(404, r#"{"detail": "no existe"}"#);
        let fallback = spawn_loyalty_api();
        let upstream = upstream(&primary, Some(&fallback));
        let reply = upstream.get("/api/users/V-12345678").await.unwrap();
        assert_eq!(reply.status, 404);
    }

    #[actix_web::test]
    async fn fallback_answer_is_final() {
        let primary = spawn_fixed(500, "{}");
        let fallback = spawn_fixed(502, r#"{"detail": "también caído"}"#);
        let upstream = upstream(&primary, Some(&fallback));
        let reply = upstream.get("/api/users/").await.unwrap();
        assert_eq!(reply.status, 502);
        assert!(!reply.is_success());
    }

    #[actix_web::test]
    async fn without_fallback_transport_errors_surface() {
        let upstream = upstream(UNREACHABLE, None);
        let err = upstream.get("/api/users/").await.unwrap_err();
        assert!(matches!(err, GatewayError::Unreachable(_)));
    }
}
