//! HTTP surface of the gateway: the `/api` routes the dashboard calls plus
//! `/health`. Static files are served by the default service in `main`.

pub mod data;
pub mod health;
pub mod puntos;
pub mod users;

use crate::error::GatewayError;
use actix_web::web;
use common::requests::PageQuery;

/// Registers every gateway route on an app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .route("/health", web::get().to(health::process))
        .service(users::configure_routes())
        .service(puntos::configure_routes())
        .service(data::configure_routes());
}

/// Malformed query strings (`?page=abc`) answer with a `detail` body like
/// every other gateway rejection.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| GatewayError::BadRequest(err.to_string()).into())
}

/// Applies the loyalty API's page bounds before anything is forwarded.
pub(crate) fn validated(query: web::Query<PageQuery>) -> Result<PageQuery, GatewayError> {
    let query = query.into_inner();
    query.validate().map_err(GatewayError::BadRequest)?;
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::upstream::testing::*;
    use crate::upstream::Upstream;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use common::model::{PointsSummary, ReadyCustomersPage, UploadResult, UserRecord, UsersPage};
    use serde_json::Value;

    fn default_config() -> Config {
        Config::from_lookup(|_| None).unwrap()
    }

    macro_rules! gateway {
        ($upstream:expr) => {
            gateway!($upstream, default_config())
        };
        ($upstream:expr, $config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($upstream))
                    .app_data(web::Data::new($config))
                    .configure(configure),
            )
            .await
        };
    }

    fn multipart(file_name: &str, content: &str) -> test::TestRequest {
        let boundary = "----dashboard-test-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\nContent-Type: application/octet-stream\r\n\r\n{c}\r\n--{b}--\r\n",
            b = boundary,
            f = file_name,
            c = content
        );
        test::TestRequest::post()
            .uri("/api/data/upload")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            ))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn users_page_is_decoded_and_reserialized() {
        let app = gateway!(upstream(&spawn_loyalty_api(), None));
        let req = test::TestRequest::get()
            .uri("/api/users/?page=1&limit=20")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["total"], 41);
        // Wire names survive the round trip, unknown upstream fields do not.
        assert_eq!(body["users"][0]["cedula"], USER_ID);
        assert!(body["users"][0].get("_id").is_none());

        let page: UsersPage = serde_json::from_value(body).unwrap();
        assert_eq!(page.users[0].name, "Juan Pérez");
    }

    #[actix_web::test]
    async fn out_of_range_queries_are_rejected() {
        let app = gateway!(upstream(UNREACHABLE, None));
        for uri in [
            "/api/users/?page=0&limit=20",
            "/api/users/?page=1&limit=101",
            "/api/puntos/listos-canje?page=1&limit=0",
            "/api/users/listos-canje/?page=abc",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
            let body: Value = test::read_body_json(resp).await;
            assert!(body["detail"].is_string(), "{}", uri);
        }
    }

    #[actix_web::test]
    async fn missing_query_uses_defaults() {
        let app = gateway!(upstream(&spawn_loyalty_api(), None));
        let req = test::TestRequest::get().uri("/api/users/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn not_found_passes_through_with_detail() {
        let app = gateway!(upstream(&spawn_loyalty_api(), None));
        let req = test::TestRequest::get()
            .uri("/api/users/V-999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Cliente con cédula V-999 no encontrado");
    }

    #[actix_web::test]
    async fn lookups_return_typed_records() {
        let app = gateway!(upstream(&spawn_loyalty_api(), None));

        let req = test::TestRequest::get()
            .uri("/api/users/V-12345678")
            .to_request();
        let user: UserRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user.purchase_count, 9);

        let req = test::TestRequest::get()
            .uri("/api/puntos/cliente/V-12345678")
            .to_request();
        let points: PointsSummary = test::call_and_read_body_json(&app, req).await;
        assert_eq!(points.ready_points, 1500);

        let req = test::TestRequest::get()
            .uri("/api/users/puntos/V-12345678")
            .to_request();
        let points: PointsSummary = test::call_and_read_body_json(&app, req).await;
        assert_eq!(points.valid_points, 1650);

        let req = test::TestRequest::get()
            .uri("/api/puntos/listos-canje?page=1&limit=10")
            .to_request();
        let ready: ReadyCustomersPage = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ready.total, 7);
        assert_eq!(ready.customers.len(), 1);

        let req = test::TestRequest::get()
            .uri("/api/users/listos-canje/?page=1&limit=100")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unexpected_shape_is_a_bad_gateway() {
        let primary = spawn_fixed(
            200,
            r#"{"total": 1, "users": [{"cedula": "V-1", "nombre": "Ana", "nivel": "PetaBytes"}]}"#,
        );
        let app = gateway!(upstream(&primary, None));
        let req = test::TestRequest::get().uri("/api/users/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Respuesta inválida"));
    }

    #[actix_web::test]
    async fn server_errors_fall_back_to_second_url() {
        let primary = spawn_fixed(500, r#"{"detail": "caído"}"#);
        let fallback = spawn_loyalty_api();
        let app = gateway!(upstream(&primary, Some(&fallback)));
        let req = test::TestRequest::get()
            .uri("/api/puntos/listos-canje?page=1&limit=10")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn server_errors_without_fallback_are_relayed() {
        let primary = spawn_fixed(500, r#"{"detail": "caído"}"#);
        let app = gateway!(upstream(&primary, None));
        let req = test::TestRequest::get().uri("/api/users/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "caído");
    }

    #[actix_web::test]
    async fn unreachable_upstream_is_a_bad_gateway() {
        let app = gateway!(upstream(UNREACHABLE, None));
        let req = test::TestRequest::get().uri("/api/users/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn upload_is_forwarded() {
        let app = gateway!(upstream(&spawn_loyalty_api(), None));
        let req = multipart("ventas.csv", "Tienda,Marca\nCaracas,Acme").to_request();
        let result: UploadResult = test::call_and_read_body_json(&app, req).await;
        assert_eq!(result.processed_records, 120);
        assert_eq!(result.updated_users, 38);
        assert_eq!(result.warnings, vec!["Fila 7: cédula vacía".to_string()]);
    }

    #[actix_web::test]
    async fn upload_rejects_disallowed_extension() {
        let app = gateway!(upstream(UNREACHABLE, None));
        let req = multipart("ventas.pdf", "%PDF").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["detail"],
            "Formato no válido. Solo se permiten archivos CSV o Excel (.xlsx, .xls)"
        );
    }

    #[actix_web::test]
    async fn upload_rejects_empty_and_oversized_files() {
        let mut config = default_config();
        config.upload_limit_bytes = 8;
        let app = gateway!(upstream(UNREACHABLE, None), config);

        let resp = test::call_service(&app, multipart("vacio.csv", "").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(
            &app,
            multipart("grande.xlsx", "more than eight bytes").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn health_names_the_upstream() {
        let app = gateway!(Upstream::with_client(
            reqwest::Client::new(),
            "http://loyalty.internal:8000/",
            None
        ));
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["upstream"], "http://loyalty.internal:8000");
    }
}
