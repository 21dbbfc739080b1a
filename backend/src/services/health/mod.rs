use crate::upstream::Upstream;
use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
struct Health<'a> {
    status: &'static str,
    upstream: &'a str,
}

/// `GET /health`: liveness of the gateway itself. The loyalty API is named,
/// not probed.
pub async fn process(upstream: web::Data<Upstream>) -> HttpResponse {
    HttpResponse::Ok().json(Health {
        status: "healthy",
        upstream: upstream.primary(),
    })
}
