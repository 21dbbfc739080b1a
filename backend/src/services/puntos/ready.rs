use crate::error::GatewayError;
use crate::services::validated;
use crate::upstream::Upstream;
use actix_web::{web, HttpResponse};
use common::model::ReadyCustomersPage;
use common::requests::PageQuery;

/// `GET /api/puntos/listos-canje?page=&limit=`
pub async fn process(
    upstream: web::Data<Upstream>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, GatewayError> {
    let path = upstream.paths().ready_customers(validated(query)?);
    upstream.get(&path).await?.into_typed::<ReadyCustomersPage>()
}
