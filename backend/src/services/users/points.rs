use crate::error::GatewayError;
use crate::upstream::Upstream;
use actix_web::{web, HttpResponse};
use common::model::PointsSummary;

/// `GET /api/users/puntos/{cedula}`
pub async fn process(
    upstream: web::Data<Upstream>,
    national_id: web::Path<String>,
) -> Result<HttpResponse, GatewayError> {
    let path = upstream.paths().user_points(&national_id);
    upstream.get(&path).await?.into_typed::<PointsSummary>()
}
